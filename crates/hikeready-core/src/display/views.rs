//! Composite views combining a plan with its checklist.

use std::fmt;

use serde::Serialize;

use crate::models::{ChecklistCategory, HikeChecklist, HikePlan, ReadinessScore};

/// A plan's checklist together with its current score.
///
/// The score is computed when the view is built and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistView {
    pub plan: HikePlan,
    pub checklist: HikeChecklist,
    pub readiness: ReadinessScore,
}

impl fmt::Display for ChecklistView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.plan.id, self.plan.name)?;
        writeln!(f)?;
        writeln!(f, "{}", self.readiness)?;
        write!(f, "{}", self.checklist)
    }
}

/// The departure summary: everything the hiker checked, per category.
#[derive(Debug, Clone, Serialize)]
pub struct ReadySummary {
    pub plan: HikePlan,
    pub checklist: HikeChecklist,
}

impl fmt::Display for ReadySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = if self.plan.is_ready {
            "You're ready to go"
        } else {
            "Packed so far"
        };
        writeln!(f, "# {heading}: {}", self.plan.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} items packed for a {}-hour {} hike in {} weather.",
            self.checklist.checked_items().count(),
            self.plan.duration,
            self.plan.terrain,
            self.plan.weather
        )?;

        for category in ChecklistCategory::ALL {
            let names: Vec<&str> = self
                .checklist
                .checked_items()
                .filter(|item| item.category == *category)
                .map(|item| item.name.as_str())
                .collect();
            if names.is_empty() {
                continue;
            }

            writeln!(f)?;
            writeln!(f, "## {} {}", category.icon(), category.label())?;
            writeln!(f)?;
            for name in names {
                writeln!(f, "- ✓ {name}")?;
            }
        }

        if self.plan.is_ready {
            writeln!(f)?;
            writeln!(f, "Have a safe hike!")?;
        }

        Ok(())
    }
}
