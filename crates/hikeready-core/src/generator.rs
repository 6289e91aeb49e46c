//! Checklist generation.
//!
//! [`generate`] walks the [`CATALOG`] in declaration order and, for each
//! template:
//!
//! 1. keeps it only if its conditions pass for the plan,
//! 2. applies the [`STATUS_UPGRADES`] table,
//! 3. applies the [`CRITICALITY_UPGRADES`] table,
//! 4. instantiates an unchecked [`ChecklistItem`] with a positional ID.
//!
//! Generation is pure: the same plan always yields the same items, IDs
//! included.

use log::debug;

use crate::{
    catalog::{ItemTemplate, CATALOG, CRITICALITY_UPGRADES, STATUS_UPGRADES},
    models::{ChecklistItem, HikePlan},
};

/// Generates the initial, fully unchecked checklist for a plan.
///
/// # Examples
///
/// ```rust
/// use hikeready_core::{
///     generator::generate,
///     models::{Elevation, ExperienceLevel, GroupSize, HikePlan, HikeType, Terrain, Weather},
/// };
/// use jiff::Timestamp;
///
/// let plan = HikePlan {
///     id: 1,
///     name: "Coast walk".to_string(),
///     hike_type: HikeType::Short,
///     terrain: Terrain::Coastal,
///     elevation: Elevation::Low,
///     duration: 2,
///     group_size: GroupSize::Solo,
///     experience_level: ExperienceLevel::Advanced,
///     weather: Weather::Clear,
///     created_at: Timestamp::now(),
///     is_ready: false,
/// };
///
/// let items = generate(&plan);
/// assert_eq!(items[0].id, "item-1");
/// assert_eq!(items[0].name, "Backpack");
/// assert!(items.iter().all(|item| !item.checked));
/// assert!(items.iter().all(|item| item.name != "Tent"));
/// ```
pub fn generate(plan: &HikePlan) -> Vec<ChecklistItem> {
    let items: Vec<ChecklistItem> = CATALOG
        .iter()
        .filter(|template| template.applies_to(plan))
        .enumerate()
        .map(|(index, template)| instantiate(index + 1, template, plan))
        .collect();

    debug!(
        "Generated {} of {} catalog items for plan {} ({} weather)",
        items.len(),
        CATALOG.len(),
        plan.id,
        plan.weather
    );

    items
}

fn instantiate(position: usize, template: &ItemTemplate, plan: &HikePlan) -> ChecklistItem {
    let mut status = template.base_status;
    let mut is_critical = template.is_critical;

    for rule in STATUS_UPGRADES.iter().chain(CRITICALITY_UPGRADES) {
        if rule.applies(template.name, plan) {
            rule.upgrade.apply(&mut status, &mut is_critical);
        }
    }

    ChecklistItem {
        id: format!("item-{position}"),
        name: template.name.to_string(),
        description: template.description.to_string(),
        category: template.category,
        status,
        is_critical,
        checked: false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use jiff::Timestamp;

    use super::*;
    use crate::models::{
        ChecklistCategory, Elevation, ExperienceLevel, GroupSize, HikeType, ItemStatus, Terrain,
        Weather,
    };

    fn create_test_plan() -> HikePlan {
        HikePlan {
            id: 7,
            name: "Test hike".to_string(),
            hike_type: HikeType::Day,
            terrain: Terrain::Forest,
            elevation: Elevation::Medium,
            duration: 6,
            group_size: GroupSize::Solo,
            experience_level: ExperienceLevel::Intermediate,
            weather: Weather::Clear,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            is_ready: false,
        }
    }

    fn find<'a>(items: &'a [ChecklistItem], name: &str) -> Option<&'a ChecklistItem> {
        items.iter().find(|item| item.name == name)
    }

    fn names(items: &[ChecklistItem]) -> HashSet<(String, ChecklistCategory)> {
        items
            .iter()
            .map(|item| (item.name.clone(), item.category))
            .collect()
    }

    #[test]
    fn test_ids_are_sequential_and_one_indexed() {
        let items = generate(&create_test_plan());
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.id, format!("item-{}", index + 1));
        }
    }

    /// Weather condition as hikers read it: mixed weather counts as any.
    fn expects_weather(plan: &HikePlan, weather: Weather) -> bool {
        plan.weather == weather || plan.weather == Weather::Mixed
    }

    /// Hand-written inclusion rules, one arm per catalog item.
    fn expected_inclusion(name: &str, plan: &HikePlan) -> bool {
        let overnight = plan.hike_type == HikeType::Overnight;
        let day_or_overnight = plan.hike_type != HikeType::Short;
        let above_low = plan.elevation != Elevation::Low;

        match name {
            "Trekking poles" | "Insulating mid layer" => above_low,
            "Headlamp + batteries" | "Portable power bank" => plan.duration >= 4,
            "Tent" | "Sleeping bag" | "Sleeping pad" | "Camp stove & fuel" => overnight,
            "Traction devices" => above_low && expects_weather(plan, Weather::Cold),
            "Waterproof pack cover" | "Dry bags" => expects_weather(plan, Weather::Rain),
            "Water filter/purification" | "Full meals" | "Rain pants" | "Fire starter" => {
                day_or_overnight
            }
            "Extra water (1L+)" | "Sun hat with brim" | "Cooling towel" => {
                expects_weather(plan, Weather::Heat)
            }
            "Warm insulating layers" | "Warm gloves" => expects_weather(plan, Weather::Cold),
            "Gloves" => plan.elevation == Elevation::High && plan.terrain == Terrain::Mountain,
            "Gaiters" => matches!(plan.terrain, Terrain::Volcanic | Terrain::Mountain),
            "Bear spray" => matches!(plan.terrain, Terrain::Forest | Terrain::Mountain),
            "Compass" => plan.experience_level != ExperienceLevel::Advanced,
            "Emergency procedures reviewed" => plan.experience_level == ExperienceLevel::Beginner,
            "Group meeting point set" => plan.group_size == GroupSize::Group,
            "Backpack"
            | "Hiking boots/shoes"
            | "Water (2L minimum)"
            | "Snacks & trail food"
            | "Electrolyte tablets"
            | "Moisture-wicking base layer"
            | "Extra socks"
            | "Hat/cap"
            | "Rain jacket"
            | "Sunscreen SPF 30+"
            | "Sunglasses"
            | "Emergency space blanket"
            | "First aid kit"
            | "Physical map of area"
            | "Whistle"
            | "Multi-tool/knife"
            | "Fully charged phone"
            | "Offline maps downloaded"
            | "Emergency contacts saved"
            | "Route researched"
            | "Weather forecast checked"
            | "Someone knows your plan"
            | "Trailhead parking confirmed"
            | "Permits obtained" => true,
            other => panic!("no inclusion rule written for {other}"),
        }
    }

    /// Hand-written upgrades: (becomes required, becomes critical).
    fn expected_upgrades(name: &str, plan: &HikePlan) -> (bool, bool) {
        // Upgrades compare the literal weather, so mixed never matches
        let weather = plan.weather;
        match name {
            "Trekking poles" => (plan.elevation == Elevation::High, false),
            "Rain pants" => (
                plan.hike_type == HikeType::Overnight || weather == Weather::Rain,
                weather == Weather::Rain,
            ),
            "Waterproof pack cover" => (weather == Weather::Rain, false),
            "Warm insulating layers" | "Warm gloves" => {
                (weather == Weather::Cold, weather == Weather::Cold)
            }
            "Sun hat with brim" => (weather == Weather::Heat, false),
            "Extra water (1L+)" => (false, weather == Weather::Heat),
            _ => (false, false),
        }
    }

    #[test]
    fn test_every_plan_matches_hand_written_rules() {
        let mut plans_checked = 0;

        for hike_type in HikeType::ALL {
            for terrain in Terrain::ALL {
                for elevation in Elevation::ALL {
                    for duration in [1, 3, 4, 24] {
                        for group_size in GroupSize::ALL {
                            for experience_level in ExperienceLevel::ALL {
                                for weather in Weather::ALL {
                                    let plan = HikePlan {
                                        hike_type: *hike_type,
                                        terrain: *terrain,
                                        elevation: *elevation,
                                        duration,
                                        group_size: *group_size,
                                        experience_level: *experience_level,
                                        weather: *weather,
                                        ..create_test_plan()
                                    };
                                    assert_matches_rules(&plan);
                                    plans_checked += 1;
                                }
                            }
                        }
                    }
                }
            }
        }

        assert_eq!(plans_checked, 4320);
    }

    fn assert_matches_rules(plan: &HikePlan) {
        let items = generate(plan);

        let expected: Vec<&str> = CATALOG
            .iter()
            .map(|template| template.name)
            .filter(|name| expected_inclusion(name, plan))
            .collect();
        let actual: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(actual, expected, "{plan:?}");
        assert_eq!(names(&items).len(), items.len(), "no duplicates");

        for item in &items {
            let template = crate::catalog::template(&item.name).expect("from catalog");
            let (required, critical) = expected_upgrades(&item.name, plan);

            let status = if required {
                ItemStatus::Required
            } else {
                template.base_status
            };
            assert_eq!(item.status, status, "{} for {plan:?}", item.name);
            assert_eq!(
                item.is_critical,
                template.is_critical || critical,
                "{} for {plan:?}",
                item.name
            );
            assert_eq!(item.category, template.category);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let plan = create_test_plan();
        assert_eq!(generate(&plan), generate(&plan));
    }

    #[test]
    fn test_items_start_unchecked() {
        assert!(generate(&create_test_plan()).iter().all(|item| !item.checked));
    }

    #[test]
    fn test_cold_overnight_beginner_example() {
        let plan = HikePlan {
            hike_type: HikeType::Overnight,
            terrain: Terrain::Mountain,
            elevation: Elevation::High,
            duration: 10,
            group_size: GroupSize::Solo,
            experience_level: ExperienceLevel::Beginner,
            weather: Weather::Cold,
            ..create_test_plan()
        };
        let items = generate(&plan);

        assert!(find(&items, "Tent").is_some());
        assert!(find(&items, "Sleeping bag").is_some());

        let poles = find(&items, "Trekking poles").expect("poles included");
        assert_eq!(poles.status, ItemStatus::Required);

        for name in ["Warm insulating layers", "Warm gloves"] {
            let item = find(&items, name).expect("cold weather item included");
            assert_eq!(item.status, ItemStatus::Required, "{name}");
            assert!(item.is_critical, "{name}");
        }

        for name in ["Compass", "Emergency procedures reviewed"] {
            let item = find(&items, name).expect("beginner item included");
            assert_eq!(item.status, ItemStatus::Required, "{name}");
        }

        // Overnight makes rain pants required, but only rain makes them critical
        let rain_pants = find(&items, "Rain pants").expect("rain pants included");
        assert_eq!(rain_pants.status, ItemStatus::Required);
        assert!(!rain_pants.is_critical);
    }

    #[test]
    fn test_mixed_weather_includes_every_weather_item() {
        let plan = HikePlan {
            weather: Weather::Mixed,
            elevation: Elevation::High,
            ..create_test_plan()
        };
        let items = generate(&plan);

        for template in CATALOG.iter().filter(|t| t.is_weather_dependent()) {
            assert!(find(&items, template.name).is_some(), "{}", template.name);
        }
        // Rain, cold and heat variants side by side
        assert!(find(&items, "Dry bags").is_some());
        assert!(find(&items, "Warm gloves").is_some());
        assert!(find(&items, "Cooling towel").is_some());
    }

    #[test]
    fn test_mixed_weather_does_not_trigger_weather_upgrades() {
        let plan = HikePlan {
            weather: Weather::Mixed,
            ..create_test_plan()
        };
        let items = generate(&plan);
        let gloves = find(&items, "Warm gloves").expect("included under mixed");
        assert_eq!(gloves.status, ItemStatus::Recommended);
        assert!(!gloves.is_critical);
    }

    #[test]
    fn test_clear_weather_excludes_weather_items() {
        let items = generate(&create_test_plan());
        for template in CATALOG.iter().filter(|t| t.is_weather_dependent()) {
            assert!(find(&items, template.name).is_none(), "{}", template.name);
        }
    }

    #[test]
    fn test_weather_does_not_affect_unconditioned_items() {
        let clear = generate(&create_test_plan());
        let rainy = generate(&HikePlan {
            weather: Weather::Rain,
            ..create_test_plan()
        });
        for item in &clear {
            assert!(find(&rainy, &item.name).is_some(), "{}", item.name);
        }
    }

    #[test]
    fn test_heat_makes_extra_water_critical() {
        let items = generate(&HikePlan {
            weather: Weather::Heat,
            ..create_test_plan()
        });
        let water = find(&items, "Extra water (1L+)").expect("included in heat");
        assert!(water.is_critical);
        assert_eq!(
            find(&items, "Sun hat with brim").map(|item| item.status),
            Some(ItemStatus::Required)
        );
    }

    #[test]
    fn test_rain_upgrades_rain_pants() {
        let items = generate(&HikePlan {
            weather: Weather::Rain,
            ..create_test_plan()
        });
        let pants = find(&items, "Rain pants").expect("day hike includes rain pants");
        assert_eq!(pants.status, ItemStatus::Required);
        assert!(pants.is_critical);
    }

    #[test]
    fn test_adjustments_never_downgrade() {
        for weather in Weather::ALL {
            for elevation in Elevation::ALL {
                let plan = HikePlan {
                    weather: *weather,
                    elevation: *elevation,
                    hike_type: HikeType::Overnight,
                    ..create_test_plan()
                };
                for item in generate(&plan) {
                    let template = crate::catalog::template(&item.name).expect("from catalog");
                    if template.base_status == ItemStatus::Required {
                        assert_eq!(item.status, ItemStatus::Required);
                    }
                    if template.is_critical {
                        assert!(item.is_critical);
                    }
                }
            }
        }
    }

    #[test]
    fn test_short_hike_excludes_day_and_overnight_items() {
        let items = generate(&HikePlan {
            hike_type: HikeType::Short,
            duration: 2,
            ..create_test_plan()
        });
        for name in ["Tent", "Full meals", "Fire starter", "Headlamp + batteries"] {
            assert!(find(&items, name).is_none(), "{name}");
        }
    }

    #[test]
    fn test_group_hike_adds_meeting_point() {
        let solo = generate(&create_test_plan());
        let group = generate(&HikePlan {
            group_size: GroupSize::Group,
            ..create_test_plan()
        });
        assert!(find(&solo, "Group meeting point set").is_none());
        assert!(find(&group, "Group meeting point set").is_some());
    }
}
