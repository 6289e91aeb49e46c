#![allow(dead_code)]

use hikeready_core::{params::CreateHikePlan, Planner, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create a test planner backed by a temporary database
pub async fn create_test_planner() -> (TempDir, Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let planner = PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}

/// Parameters for the overnight, high-mountain, cold-weather beginner hike.
pub fn cold_overnight_params() -> CreateHikePlan {
    CreateHikePlan {
        name: None,
        hike_type: "overnight".to_string(),
        terrain: "mountain".to_string(),
        elevation: "high".to_string(),
        duration: 10,
        group_size: "solo".to_string(),
        experience_level: "beginner".to_string(),
        weather: Some("cold".to_string()),
    }
}

/// Parameters for a short, low, clear-weather coastal hike.
pub fn short_coastal_params(name: &str) -> CreateHikePlan {
    CreateHikePlan {
        name: Some(name.to_string()),
        hike_type: "short".to_string(),
        terrain: "coastal".to_string(),
        elevation: "low".to_string(),
        duration: 2,
        group_size: "group".to_string(),
        experience_level: "advanced".to_string(),
        weather: None,
    }
}
