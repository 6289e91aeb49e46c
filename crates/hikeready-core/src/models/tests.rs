#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;

    use crate::{
        models::{
            ChecklistCategory, ChecklistItem, Elevation, ExperienceLevel, GroupSize,
            HikeChecklist, HikePlan, HikeType, ItemStatus, NewHikePlan, PlanSummary,
            ReadinessScore, ReadinessStatus, Terrain, Weather,
        },
        params::CreateHikePlan,
        PlannerError,
    };

    fn create_test_plan() -> HikePlan {
        HikePlan {
            id: 12,
            name: "Ridge traverse".to_string(),
            hike_type: HikeType::Overnight,
            terrain: Terrain::Mountain,
            elevation: Elevation::High,
            duration: 10,
            group_size: GroupSize::Solo,
            experience_level: ExperienceLevel::Beginner,
            weather: Weather::Cold,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            is_ready: false,
        }
    }

    fn create_test_item(id: &str, name: &str, critical: bool) -> ChecklistItem {
        ChecklistItem {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("About {name}"),
            category: ChecklistCategory::SafetyNavigation,
            status: ItemStatus::Required,
            is_critical: critical,
            checked: false,
        }
    }

    fn create_params() -> CreateHikePlan {
        CreateHikePlan {
            name: Some("  Morning loop  ".to_string()),
            hike_type: "Day".to_string(),
            terrain: "FOREST".to_string(),
            elevation: "low".to_string(),
            duration: 3,
            group_size: "group".to_string(),
            experience_level: "advanced".to_string(),
            weather: Some("rain".to_string()),
        }
    }

    #[test]
    fn test_enum_parsing_is_case_insensitive() {
        assert_eq!(" Overnight ".parse::<HikeType>(), Ok(HikeType::Overnight));
        assert_eq!("VOLCANIC".parse::<Terrain>(), Ok(Terrain::Volcanic));
        assert_eq!(
            "water-nutrition".parse::<ChecklistCategory>(),
            Ok(ChecklistCategory::WaterNutrition)
        );
        assert_eq!(
            "swamp".parse::<Terrain>(),
            Err("Invalid terrain: swamp".to_string())
        );
    }

    #[test]
    fn test_enum_display_matches_storage_form() {
        for weather in Weather::ALL {
            assert_eq!(weather.to_string(), weather.as_str());
            assert_eq!(weather.as_str().parse::<Weather>(), Ok(*weather));
        }
        assert_eq!(ReadinessStatus::NotReady.to_string(), "not-ready");
        assert_eq!(ChecklistCategory::PowerPhone.to_string(), "power-phone");
    }

    #[test]
    fn test_enum_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ChecklistCategory::KnowledgePlanning).unwrap();
        assert_eq!(json, "\"knowledge-planning\"");

        let status: ReadinessStatus = serde_json::from_str("\"not-ready\"").unwrap();
        assert_eq!(status, ReadinessStatus::NotReady);
    }

    #[test]
    fn test_categories_sort_in_display_order() {
        let mut categories = ChecklistCategory::ALL.to_vec();
        categories.reverse();
        categories.sort();
        assert_eq!(categories, ChecklistCategory::ALL);
        assert_eq!(ChecklistCategory::WaterNutrition.label(), "Water & Nutrition");
    }

    #[test]
    fn test_default_name() {
        assert_eq!(
            HikePlan::default_name(Terrain::Mountain, HikeType::Overnight),
            "Mountain overnight hike"
        );
        assert_eq!(
            HikePlan::default_name(Terrain::Coastal, HikeType::Short),
            "Coastal short hike"
        );
    }

    #[test]
    fn test_plan_without_weather_deserializes_as_clear() {
        let mut value = serde_json::to_value(create_test_plan()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("weather");
        object.remove("is_ready");

        let plan: HikePlan = serde_json::from_value(value).unwrap();
        assert_eq!(plan.weather, Weather::Clear);
        assert!(!plan.is_ready);
    }

    #[test]
    fn test_plan_display() {
        let output = create_test_plan().to_string();

        assert!(output.starts_with("# 12. Ridge traverse\n"));
        assert!(output.contains("- Type: overnight"));
        assert!(output.contains("- Terrain: mountain"));
        assert!(output.contains("- Duration: 10 hours"));
        assert!(output.contains("- Weather: cold"));
        assert!(output.contains("- Ready to go: no"));
        assert!(output.contains("- Created: "));
    }

    #[test]
    fn test_item_display() {
        let mut item = create_test_item("item-3", "Whistle", true);
        assert_eq!(
            item.to_string(),
            "- [ ] Whistle (item-3) · required · ⚠ critical\n  About Whistle\n"
        );

        item.checked = true;
        item.is_critical = false;
        item.status = ItemStatus::Recommended;
        assert!(item
            .to_string()
            .starts_with("- [x] Whistle (item-3) · recommended\n"));
    }

    #[test]
    fn test_checklist_lookup_and_checked_items() {
        let mut checklist = HikeChecklist {
            plan_id: 12,
            items: vec![
                create_test_item("item-1", "Map", true),
                create_test_item("item-2", "Compass", true),
            ],
            last_updated: Timestamp::from_second(1640995200).unwrap(),
        };
        checklist.items[1].checked = true;

        assert_eq!(checklist.item("item-2").map(|i| i.name.as_str()), Some("Compass"));
        assert!(checklist.item("item-9").is_none());
        let checked: Vec<_> = checklist.checked_items().map(|i| i.id.as_str()).collect();
        assert_eq!(checked, vec!["item-2"]);
    }

    #[test]
    fn test_readiness_display_truncates_missing_critical() {
        let missing = ["Map", "Compass", "Whistle", "Headlamp", "First aid kit"]
            .iter()
            .enumerate()
            .map(|(i, name)| create_test_item(&format!("item-{}", i + 1), name, true))
            .collect();
        let score = ReadinessScore {
            percentage: 38,
            status: ReadinessStatus::NotReady,
            required_completed: 3,
            required_total: 8,
            missing_critical: missing,
        };
        let output = score.to_string();

        assert!(output.contains("**Readiness: 38%** (✗ Not ready)"));
        assert!(output.contains("3 of 8 required items complete"));
        assert!(output.contains("⚠ Missing critical items: Map, Compass, Whistle +2 more"));
    }

    #[test]
    fn test_readiness_display_without_missing_critical() {
        let score = ReadinessScore {
            percentage: 100,
            status: ReadinessStatus::Ready,
            required_completed: 4,
            required_total: 4,
            missing_critical: vec![],
        };
        let output = score.to_string();

        assert!(output.contains("(✓ Ready!)"));
        assert!(!output.contains("Missing critical"));
    }

    #[test]
    fn test_plan_summary_from_plan() {
        let plan = create_test_plan();
        let checklist = HikeChecklist {
            plan_id: plan.id,
            items: vec![create_test_item("item-1", "Map", true)],
            last_updated: plan.created_at,
        };

        let summary = PlanSummary::from_plan(plan.clone(), Some(&checklist), Some(12));
        assert!(summary.is_active);
        let readiness = summary.readiness.as_ref().unwrap();
        assert_eq!(readiness.required_total, 1);
        assert_eq!(readiness.status, ReadinessStatus::NotReady);

        let summary = PlanSummary::from_plan(plan, None, Some(3));
        assert!(!summary.is_active);
        assert!(summary.readiness.is_none());
        assert!(summary.to_string().contains("- **Readiness**: no checklist"));
    }

    #[test]
    fn test_new_plan_from_params() {
        let plan = NewHikePlan::try_from(&create_params()).unwrap();

        assert_eq!(plan.name, "Morning loop");
        assert_eq!(plan.hike_type, HikeType::Day);
        assert_eq!(plan.terrain, Terrain::Forest);
        assert_eq!(plan.weather, Weather::Rain);
    }

    #[test]
    fn test_new_plan_blank_name_falls_back() {
        let mut params = create_params();
        params.name = Some("   ".to_string());
        params.weather = None;

        let plan = params.validate().unwrap();
        assert_eq!(plan.name, "Forest day hike");
        assert_eq!(plan.weather, Weather::Clear);
    }

    #[test]
    fn test_new_plan_rejects_bad_input() {
        let mut params = create_params();
        params.terrain = "swamp".to_string();
        let err = params.validate().unwrap_err();
        assert!(
            matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "terrain"),
            "unexpected error: {err}"
        );

        for duration in [0, 25] {
            let mut params = create_params();
            params.duration = duration;
            let err = params.validate().unwrap_err();
            assert!(matches!(err, PlannerError::InvalidInput { ref field, .. } if field == "duration"));
        }

        let mut params = create_params();
        params.duration = 24;
        assert!(params.validate().is_ok());
    }
}
