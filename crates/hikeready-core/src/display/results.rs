//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{ChecklistItem, HikePlan};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use hikeready_core::{
///     display::CreateResult,
///     models::{Elevation, ExperienceLevel, GroupSize, HikePlan, HikeType, Terrain, Weather},
/// };
/// use jiff::Timestamp;
///
/// let plan = HikePlan {
///     id: 7,
///     name: "Coastal day hike".to_string(),
///     hike_type: HikeType::Day,
///     terrain: Terrain::Coastal,
///     elevation: Elevation::Low,
///     duration: 4,
///     group_size: GroupSize::Group,
///     experience_level: ExperienceLevel::Beginner,
///     weather: Weather::Heat,
///     created_at: Timestamp::now(),
///     is_ready: false,
/// };
///
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.starts_with("Created hike plan with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<HikePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created hike plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<HikePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted hike plan '{}' (ID: {}) and its checklist",
            self.resource.name, self.resource.id
        )
    }
}

/// Wrapper type for displaying a single item toggle.
pub struct ToggleResult<'a> {
    pub item: &'a ChecklistItem,
}

impl fmt::Display for ToggleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.item.checked { "Checked" } else { "Unchecked" };
        writeln!(f, "{verb} '{}' ({})", self.item.name, self.item.id)
    }
}
