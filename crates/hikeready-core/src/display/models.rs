//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation logic. All output is markdown.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    ChecklistCategory, ChecklistItem, Elevation, ExperienceLevel, GroupSize, HikeChecklist,
    HikePlan, HikeType, ItemStatus, PlanSummary, ReadinessScore, ReadinessStatus, Terrain,
    Weather,
};

/// How many missing critical items are named before collapsing to "+N more".
const SHOWN_MISSING_CRITICAL: usize = 3;

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    HikeType,
    Terrain,
    Elevation,
    GroupSize,
    ExperienceLevel,
    Weather,
    ItemStatus,
    ChecklistCategory,
    ReadinessStatus,
);

fn hours(duration: u32) -> String {
    if duration == 1 {
        "1 hour".to_string()
    } else {
        format!("{duration} hours")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Names of the first few missing critical items, e.g. "Map, Headlamp, First aid kit +2 more".
fn missing_critical_names(items: &[ChecklistItem]) -> String {
    let shown = items
        .iter()
        .take(SHOWN_MISSING_CRITICAL)
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    match items.len().saturating_sub(SHOWN_MISSING_CRITICAL) {
        0 => shown,
        rest => format!("{shown} +{rest} more"),
    }
}

impl fmt::Display for HikePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.hike_type)?;
        writeln!(f, "- Terrain: {}", self.terrain)?;
        writeln!(f, "- Elevation: {}", self.elevation)?;
        writeln!(f, "- Duration: {}", hours(self.duration))?;
        writeln!(f, "- Group: {}", self.group_size)?;
        writeln!(f, "- Experience: {}", self.experience_level)?;
        writeln!(f, "- Weather: {}", self.weather)?;
        writeln!(f, "- Ready to go: {}", yes_no(self.is_ready))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        write!(f, "- [{mark}] {} ({}) · {}", self.name, self.id, self.status)?;
        if self.is_critical {
            write!(f, " · ⚠ critical")?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", self.description)
    }
}

impl fmt::Display for HikeChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No checklist items.");
        }

        for category in ChecklistCategory::ALL {
            let mut items = self
                .items
                .iter()
                .filter(|item| item.category == *category)
                .peekable();
            if items.peek().is_none() {
                continue;
            }

            writeln!(f, "## {} {}", category.icon(), category.label())?;
            writeln!(f)?;
            for item in items {
                write!(f, "{item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ReadinessScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "**Readiness: {}%** ({})",
            self.percentage,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{} of {} required items complete",
            self.required_completed, self.required_total
        )?;

        if !self.missing_critical.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "⚠ Missing critical items: {}",
                missing_critical_names(&self.missing_critical)
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = if self.is_active { " (active)" } else { "" };
        writeln!(f, "## {}. {}{active}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(
            f,
            "- **Hike**: {} on {} terrain, {}, {} weather",
            self.hike_type,
            self.terrain,
            hours(self.duration),
            self.weather
        )?;
        match &self.readiness {
            Some(score) => writeln!(
                f,
                "- **Readiness**: {}% ({})",
                score.percentage,
                score.status.with_icon()
            )?,
            None => writeln!(f, "- **Readiness**: no checklist")?,
        }
        if self.is_ready {
            writeln!(f, "- **Ready to go**: yes")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}
