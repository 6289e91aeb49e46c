//! Validated request types.

use crate::{
    error::PlannerError,
    models::{Elevation, ExperienceLevel, GroupSize, HikePlan, HikeType, Terrain, Weather},
    params::CreateHikePlan,
};

/// Longest hike duration accepted, in hours.
pub const MAX_DURATION_HOURS: u32 = 24;

/// A fully validated plan waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHikePlan {
    pub name: String,
    pub hike_type: HikeType,
    pub terrain: Terrain,
    pub elevation: Elevation,
    pub duration: u32,
    pub group_size: GroupSize,
    pub experience_level: ExperienceLevel,
    pub weather: Weather,
}

fn parse_field<T>(field: &str, value: &str) -> Result<T, PlannerError>
where
    T: std::str::FromStr<Err = String>,
{
    value
        .parse()
        .map_err(|reason: String| PlannerError::invalid_input(field).with_reason(reason))
}

impl TryFrom<&CreateHikePlan> for NewHikePlan {
    type Error = PlannerError;

    /// Parse and validate raw plan parameters.
    ///
    /// Enum values are matched case-insensitively, a missing weather value
    /// means clear weather, and an empty name falls back to
    /// [`HikePlan::default_name`].
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When an enum value is unknown
    /// * `PlannerError::InvalidInput` - When the duration is outside 1..=24 hours
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hikeready_core::{models::{NewHikePlan, Weather}, params::CreateHikePlan};
    ///
    /// let params = CreateHikePlan {
    ///     name: None,
    ///     hike_type: "overnight".to_string(),
    ///     terrain: "mountain".to_string(),
    ///     elevation: "high".to_string(),
    ///     duration: 10,
    ///     group_size: "solo".to_string(),
    ///     experience_level: "beginner".to_string(),
    ///     weather: None,
    /// };
    ///
    /// let plan = NewHikePlan::try_from(&params)?;
    /// assert_eq!(plan.name, "Mountain overnight hike");
    /// assert_eq!(plan.weather, Weather::Clear);
    /// # Ok::<(), hikeready_core::PlannerError>(())
    /// ```
    fn try_from(params: &CreateHikePlan) -> Result<Self, Self::Error> {
        let hike_type: HikeType = parse_field("hike_type", &params.hike_type)?;
        let terrain: Terrain = parse_field("terrain", &params.terrain)?;
        let elevation = parse_field("elevation", &params.elevation)?;
        let group_size = parse_field("group_size", &params.group_size)?;
        let experience_level = parse_field("experience_level", &params.experience_level)?;
        let weather = match params.weather.as_deref() {
            Some(value) => parse_field("weather", value)?,
            None => Weather::default(),
        };

        if params.duration == 0 || params.duration > MAX_DURATION_HOURS {
            return Err(PlannerError::invalid_input("duration").with_reason(format!(
                "must be between 1 and {MAX_DURATION_HOURS} hours, got {}",
                params.duration
            )));
        }

        let name = match params.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => HikePlan::default_name(terrain, hike_type),
        };

        Ok(Self {
            name,
            hike_type,
            terrain,
            elevation,
            duration: params.duration,
            group_size,
            experience_level,
            weather,
        })
    }
}
