//! Catalog data.

use super::{Conditions, ItemTemplate};
use crate::models::{
    ChecklistCategory::*,
    Elevation, ExperienceLevel, GroupSize, HikeType,
    ItemStatus::{Recommended, Required},
    Terrain, Weather,
};

const OVERNIGHT: &[HikeType] = &[HikeType::Overnight];
const DAY_OR_OVERNIGHT: &[HikeType] = &[HikeType::Day, HikeType::Overnight];
const ABOVE_LOW: &[Elevation] = &[Elevation::Medium, Elevation::High];

/// Every item a checklist can contain, in output order.
#[rustfmt::skip]
pub static CATALOG: &[ItemTemplate] = &[
    // Gear
    ItemTemplate::new("Backpack", "Appropriate size for your hike duration", Gear, Required, true),
    ItemTemplate::new("Hiking boots/shoes", "Broken-in, ankle support for rough terrain", Gear, Required, true),
    ItemTemplate::new("Trekking poles", "Reduce strain on knees, especially on descents", Gear, Recommended, false)
        .when(Conditions { elevations: Some(ABOVE_LOW), ..Conditions::NONE }),
    ItemTemplate::new("Headlamp + batteries", "Essential if caught after dark", Gear, Required, true)
        .when(Conditions { min_duration: Some(4), ..Conditions::NONE }),
    ItemTemplate::new("Tent", "Appropriate weight and weather rating", Gear, Required, true)
        .when(Conditions { hike_types: Some(OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Sleeping bag", "Temperature rated for expected conditions", Gear, Required, true)
        .when(Conditions { hike_types: Some(OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Sleeping pad", "Insulation and comfort from ground", Gear, Required, false)
        .when(Conditions { hike_types: Some(OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Traction devices", "Microspikes or crampons for icy sections", Gear, Recommended, false)
        .when(Conditions { elevations: Some(ABOVE_LOW), weather: Some(&[Weather::Cold]), ..Conditions::NONE }),
    ItemTemplate::new("Waterproof pack cover", "Keeps gear dry in sustained rain", Gear, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Rain]), ..Conditions::NONE }),
    ItemTemplate::new("Dry bags", "Protect electronics and spare clothing", Gear, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Rain]), ..Conditions::NONE }),

    // Water & nutrition
    ItemTemplate::new("Water (2L minimum)", "More for hot weather or longer hikes", WaterNutrition, Required, true),
    ItemTemplate::new("Water filter/purification", "Essential if refilling from natural sources", WaterNutrition, Required, true)
        .when(Conditions { hike_types: Some(DAY_OR_OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Snacks & trail food", "High-energy, easy to eat on the move", WaterNutrition, Required, true),
    ItemTemplate::new("Full meals", "Packed breakfast, lunch, dinner as needed", WaterNutrition, Required, true)
        .when(Conditions { hike_types: Some(DAY_OR_OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Electrolyte tablets", "Replace salts lost through sweating", WaterNutrition, Recommended, false),
    ItemTemplate::new("Camp stove & fuel", "For cooking hot meals", WaterNutrition, Required, false)
        .when(Conditions { hike_types: Some(OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Extra water (1L+)", "Heat drives fluid loss well above normal", WaterNutrition, Required, false)
        .when(Conditions { weather: Some(&[Weather::Heat]), ..Conditions::NONE }),

    // Clothing
    ItemTemplate::new("Moisture-wicking base layer", "Keeps you dry and comfortable", Clothing, Required, false),
    ItemTemplate::new("Insulating mid layer", "Fleece or down for warmth", Clothing, Required, true)
        .when(Conditions { elevations: Some(ABOVE_LOW), ..Conditions::NONE }),
    ItemTemplate::new("Extra socks", "Dry feet prevent blisters", Clothing, Required, false),
    ItemTemplate::new("Hat/cap", "Sun protection or warmth depending on conditions", Clothing, Required, false),
    ItemTemplate::new("Gloves", "Protect hands in cold or rough terrain", Clothing, Recommended, false)
        .when(Conditions { elevations: Some(&[Elevation::High]), terrains: Some(&[Terrain::Mountain]), ..Conditions::NONE }),
    ItemTemplate::new("Gaiters", "Keep debris out of boots", Clothing, Recommended, false)
        .when(Conditions { terrains: Some(&[Terrain::Volcanic, Terrain::Mountain]), ..Conditions::NONE }),
    ItemTemplate::new("Warm insulating layers", "Down or synthetic puffy for stops and emergencies", Clothing, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Cold]), ..Conditions::NONE }),
    ItemTemplate::new("Warm gloves", "Insulated gloves that keep your fingers working", Clothing, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Cold]), ..Conditions::NONE }),
    ItemTemplate::new("Sun hat with brim", "Shades face and neck from direct sun", Clothing, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Heat]), ..Conditions::NONE }),

    // Weather protection
    ItemTemplate::new("Rain jacket", "Waterproof and breathable", WeatherProtection, Required, true),
    ItemTemplate::new("Rain pants", "Full weather protection", WeatherProtection, Recommended, false)
        .when(Conditions { hike_types: Some(DAY_OR_OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Sunscreen SPF 30+", "Apply before and during hike", WeatherProtection, Required, false),
    ItemTemplate::new("Sunglasses", "UV protection, especially at altitude", WeatherProtection, Required, false),
    ItemTemplate::new("Emergency space blanket", "Compact warmth if stranded", WeatherProtection, Required, true),
    ItemTemplate::new("Cooling towel", "Soak and drape over your neck to shed heat", WeatherProtection, Recommended, false)
        .when(Conditions { weather: Some(&[Weather::Heat]), ..Conditions::NONE }),

    // Safety & navigation
    ItemTemplate::new("First aid kit", "Bandages, antiseptic, medications, blister care", SafetyNavigation, Required, true),
    ItemTemplate::new("Physical map of area", "Works without battery or signal", SafetyNavigation, Required, true),
    ItemTemplate::new("Compass", "Know how to use it with your map", SafetyNavigation, Required, true)
        .when(Conditions {
            experience_levels: Some(&[ExperienceLevel::Beginner, ExperienceLevel::Intermediate]),
            ..Conditions::NONE
        }),
    ItemTemplate::new("Whistle", "Three blasts = emergency signal", SafetyNavigation, Required, true),
    ItemTemplate::new("Multi-tool/knife", "Repairs, first aid, food prep", SafetyNavigation, Required, false),
    ItemTemplate::new("Fire starter", "Matches/lighter in waterproof container", SafetyNavigation, Recommended, false)
        .when(Conditions { hike_types: Some(DAY_OR_OVERNIGHT), ..Conditions::NONE }),
    ItemTemplate::new("Bear spray", "Know how to use before needed", SafetyNavigation, Recommended, false)
        .when(Conditions { terrains: Some(&[Terrain::Forest, Terrain::Mountain]), ..Conditions::NONE }),

    // Power & phone
    ItemTemplate::new("Fully charged phone", "Emergency contact capability", PowerPhone, Required, true),
    ItemTemplate::new("Portable power bank", "Keep devices charged", PowerPhone, Required, false)
        .when(Conditions { min_duration: Some(4), ..Conditions::NONE }),
    ItemTemplate::new("Offline maps downloaded", "GPS works without cell signal", PowerPhone, Recommended, false),
    ItemTemplate::new("Emergency contacts saved", "ICE contacts accessible", PowerPhone, Required, true),

    // Knowledge & planning
    ItemTemplate::new("Route researched", "Know distance, elevation, difficulty", KnowledgePlanning, Required, true),
    ItemTemplate::new("Weather forecast checked", "Check day before and morning of", KnowledgePlanning, Required, true),
    ItemTemplate::new("Someone knows your plan", "Leave itinerary with trusted contact", KnowledgePlanning, Required, true),
    ItemTemplate::new("Trailhead parking confirmed", "Know where to park and fees", KnowledgePlanning, Recommended, false),
    ItemTemplate::new("Permits obtained", "Check if required for your trail", KnowledgePlanning, Recommended, false),
    ItemTemplate::new("Group meeting point set", "Clear time and location", KnowledgePlanning, Required, false)
        .when(Conditions { group_size: Some(GroupSize::Group), ..Conditions::NONE }),
    ItemTemplate::new("Emergency procedures reviewed", "Know what to do if separated or injured", KnowledgePlanning, Required, true)
        .when(Conditions { experience_levels: Some(&[ExperienceLevel::Beginner]), ..Conditions::NONE }),
];
