//! Catalog bundled with the crate
//!
//! Seven climates, six seasons, a desert weather-type set laid out on an
//! irregular hex map, and the phrase tables used by the description composer.

use std::collections::BTreeMap;

use crate::weather::catalog::{
    CatalogData, ClimatePreset, DescriptionTable, DescriptionTables, HexCellData, HexGridData,
    SeasonPreset, WeatherOverrides, WeatherTypeDef,
};
use crate::weather::hex_grid::HexCoord;
use crate::weather::weather_data::Ruleset;

/// Weather type adopted when a cell has no usable mapping
pub const DEFAULT_WEATHER_TYPE: &str = "dead_calm";

// (id, name, temperature, wind, precipitation, humidity, variability, ruleset)
const CLIMATES: [(&str, &str, i32, i32, i32, i32, i32, Ruleset); 7] = [
    ("temperate", "Temperate", 2, 0, 0, 2, 4, Ruleset::Standard),
    ("tropical", "Tropical", 7, 1, 4, 7, 5, Ruleset::Standard),
    ("arctic", "Arctic", -8, 4, 1, 0, 4, Ruleset::Standard),
    ("mountain", "Mountain", -3, 5, 2, 1, 6, Ruleset::Standard),
    ("coastal", "Coastal", 3, 4, 3, 5, 6, Ruleset::Standard),
    ("desert", "Desert", 6, 2, -6, -7, 3, Ruleset::Standard),
    ("scorched_wastes", "Scorched Wastes", 9, 3, -9, -9, 5, Ruleset::ExtremeHeat),
];

// (id, name, temperature, wind, precipitation, humidity, variability)
const SEASONS: [(&str, &str, i32, i32, i32, i32, i32); 6] = [
    ("spring", "Spring", 1, 1, 2, 2, 5),
    ("summer", "Summer", 5, -1, -1, 0, 3),
    ("autumn", "Autumn", -1, 2, 1, 1, 5),
    ("winter", "Winter", -6, 3, 1, -1, 4),
    ("dry_season", "Dry Season", 4, 1, -6, -5, 3),
    ("wet_season", "Wet Season", 2, 2, 6, 6, 6),
];

// (id, name, description, effect, temperature, wind, humidity)
#[allow(clippy::type_complexity)]
const WEATHER_TYPES: [(&str, &str, &str, &str, Option<i32>, Option<i32>, Option<i32>); 12] = [
    (
        "dead_calm",
        "Dead Calm",
        "Nothing changes; the day drags on exactly as it began.",
        "No special effects.",
        None,
        None,
        None,
    ),
    (
        "calm",
        "Still Air",
        "The desert holds its breath while heat shimmers over the dunes.",
        "No special effects.",
        None,
        Some(-6),
        None,
    ),
    (
        "breeze",
        "Hot Breeze",
        "A dry wind drifts in from the wastes.",
        "No special effects.",
        Some(6),
        Some(3),
        None,
    ),
    (
        "clear_heat",
        "Blazing Sun",
        "A merciless sun hangs in an empty sky.",
        "Travellers without shade drink twice their usual water.",
        Some(8),
        None,
        Some(-8),
    ),
    (
        "scorching",
        "Scorching Heat",
        "The ground itself radiates heat through boot soles.",
        "Triple water consumption; exertion risks exhaustion.",
        Some(10),
        Some(-2),
        Some(-9),
    ),
    (
        "gusts",
        "Gusting Winds",
        "Sudden gusts kick grit into faces.",
        "Ranged attacks suffer a minor penalty.",
        None,
        Some(6),
        None,
    ),
    (
        "dust_storm",
        "Dust Storm",
        "A brown wall of dust rolls in from the horizon.",
        "The area is lightly obscured; ranged attacks and perception suffer.",
        None,
        Some(8),
        Some(-7),
    ),
    (
        "sandstorm",
        "Sandstorm",
        "Howling sand scours everything in its path.",
        "The area is heavily obscured and movement is difficult.",
        Some(7),
        Some(10),
        Some(-9),
    ),
    (
        "overcast",
        "Hazy Overcast",
        "A pale haze dulls the sun to a white disc.",
        "No special effects.",
        Some(4),
        None,
        Some(-2),
    ),
    (
        "cool_wind",
        "Cool Wind",
        "An unusually cool wind brings welcome relief.",
        "No special effects.",
        Some(2),
        Some(5),
        None,
    ),
    (
        "humid_haze",
        "Oppressive Haze",
        "Rare moisture hangs in the air and makes the heat heavier.",
        "Water consumption increases.",
        Some(8),
        None,
        Some(2),
    ),
    (
        "rare_rain",
        "Rare Rainfall",
        "Clouds gather and the wastes brace for a rare rain.",
        "Water can be collected from the sky.",
        Some(3),
        None,
        Some(6),
    ),
];

const HEX_CELLS: [(i32, i32, &str); 24] = [
    (0, 0, "calm"),
    (1, -1, "breeze"),
    (1, 0, "clear_heat"),
    (0, 1, "overcast"),
    (-1, 1, "cool_wind"),
    (-1, 0, "dead_calm"),
    (0, -1, "gusts"),
    (2, -2, "dust_storm"),
    (2, -1, "scorching"),
    (2, 0, "scorching"),
    (1, 1, "humid_haze"),
    (0, 2, "rare_rain"),
    (-1, 2, "overcast"),
    (-2, 1, "cool_wind"),
    (-2, 0, "calm"),
    (-1, -1, "gusts"),
    (0, -2, "dust_storm"),
    (1, -2, "sandstorm"),
    (3, -2, "sandstorm"),
    (3, -1, "scorching"),
    (-2, 2, "rare_rain"),
    (-3, 1, "breeze"),
    (1, 2, "clear_heat"),
    (2, 1, "breeze"),
];

const TEMPERATURE: [&str; 21] = [
    "brutally, lethally cold",
    "bitterly cold",
    "freezing, with a cold that bites through furs",
    "frigid",
    "very cold",
    "cold enough for breath to hang in the air",
    "cold",
    "chilly",
    "cool and crisp",
    "cool",
    "mild",
    "pleasantly mild",
    "comfortably warm",
    "warm",
    "quite warm",
    "very warm",
    "hot",
    "very hot",
    "sweltering",
    "oppressively hot",
    "blisteringly, dangerously hot",
];

const EXTREME_HEAT_TEMPERATURE: [&str; 21] = [
    "uncannily cold for the wastes",
    "shockingly cold",
    "bitterly cold, as desert nights can be",
    "cold",
    "chilly",
    "cool",
    "refreshingly cool",
    "mild by desert standards",
    "pleasantly warm",
    "warm",
    "hot, as the wastes always are",
    "hot",
    "uncomfortably hot",
    "very hot",
    "baking hot",
    "searing",
    "scorching",
    "blistering",
    "punishingly hot, the sun a hammer on exposed skin",
    "furnace-hot",
    "a killing heat, hot enough to cook a careless traveller",
];

const WIND: [&str; 21] = [
    "the air is utterly dead and still",
    "not a breath of wind stirs",
    "the air is perfectly still",
    "the air is still",
    "the air is nearly still",
    "the faintest of airs drifts by",
    "a barely perceptible breeze stirs",
    "a faint breeze stirs",
    "a light breeze blows",
    "a gentle breeze blows",
    "a steady breeze blows",
    "a brisk breeze blows",
    "a fresh wind blows",
    "a strong breeze tugs at cloaks",
    "a strong wind blows",
    "a stiff wind makes walking an effort",
    "a near-gale howls",
    "a gale roars across the land",
    "a strong gale tears at everything loose",
    "a violent storm wind batters the land",
    "hurricane-force winds rip across the land",
];

const PRECIPITATION: [&str; 21] = [
    "the sky is a flawless, cloudless blue",
    "the sky is cloudless",
    "the sky is clear",
    "the sky is almost clear",
    "a few wisps of cloud drift overhead",
    "scattered clouds dot the sky",
    "clouds drift across the sky",
    "the sky is partly cloudy",
    "clouds cover much of the sky",
    "the sky is mostly cloudy",
    "the sky is overcast",
    "a scattering of rain/snow falls from a grey sky",
    "a fine drizzle of rain/snow falls",
    "a light rain/snow falls",
    "a steady rain/snow falls",
    "a moderate rain/snow falls",
    "a heavy rain/snow falls",
    "a driving rain/snow lashes down",
    "a torrential rain/snow pours down",
    "a ferocious deluge of rain/snow pours down",
    "an unrelenting torrent of rain/snow buries the world",
];

const HUMIDITY: [&str; 21] = [
    "The air is so dry it cracks lips and stings the eyes.",
    "The air is parched and dusty.",
    "The air is bone dry.",
    "The air is very dry.",
    "The air is dry.",
    "The air is somewhat dry.",
    "The air is a little dry.",
    "The air is slightly dry.",
    "The air is comfortable.",
    "The air is comfortable.",
    "The air is comfortable.",
    "The air is comfortable.",
    "The air is comfortable.",
    "The air is slightly damp.",
    "The air is a little damp.",
    "The air is somewhat humid.",
    "The air is humid.",
    "The air is heavy and humid.",
    "The air is muggy and clinging.",
    "The air is thick and sodden.",
    "The air is so saturated it feels like breathing water.",
];

/// Built-in catalog in its serializable form
pub fn catalog_data() -> CatalogData {
    let climates: BTreeMap<String, ClimatePreset> = CLIMATES
        .iter()
        .map(|&(id, name, temperature, wind, precipitation, humidity, variability, ruleset)| {
            (
                id.to_string(),
                ClimatePreset {
                    name: name.to_string(),
                    temperature,
                    wind,
                    precipitation,
                    humidity,
                    variability,
                    ruleset,
                },
            )
        })
        .collect();

    let seasons: BTreeMap<String, SeasonPreset> = SEASONS
        .iter()
        .map(|&(id, name, temperature, wind, precipitation, humidity, variability)| {
            (
                id.to_string(),
                SeasonPreset {
                    name: name.to_string(),
                    temperature,
                    wind,
                    precipitation,
                    humidity,
                    variability,
                },
            )
        })
        .collect();

    let weather_types = WEATHER_TYPES
        .iter()
        .map(|&(id, name, description, effect, temperature, wind, humidity)| WeatherTypeDef {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            effect: effect.to_string(),
            overrides: WeatherOverrides {
                temperature,
                wind,
                humidity,
            },
        })
        .collect();

    let cells = HEX_CELLS
        .iter()
        .map(|&(q, r, weather_type)| HexCellData {
            q,
            r,
            weather_type: weather_type.to_string(),
        })
        .collect();

    CatalogData {
        default_weather_type: DEFAULT_WEATHER_TYPE.to_string(),
        climates,
        seasons,
        weather_types,
        hex_grid: HexGridData {
            start: HexCoord::ORIGIN,
            cells,
        },
        descriptions: DescriptionTables {
            temperature: DescriptionTable::from_static(&TEMPERATURE),
            extreme_heat_temperature: DescriptionTable::from_static(&EXTREME_HEAT_TEMPERATURE),
            wind: DescriptionTable::from_static(&WIND),
            precipitation: DescriptionTable::from_static(&PRECIPITATION),
            humidity: DescriptionTable::from_static(&HUMIDITY),
        },
    }
}
