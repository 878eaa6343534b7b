//! Narrative weather text
//!
//! A base sentence from temperature, wind and precipitation, an optional
//! humidity sentence, then a sentence joining every special condition that
//! holds. Output depends only on state, ruleset and terrain.

use crate::constants::description::{NOTABLE_HUMIDITY, SLEET_MAX_TEMPERATURE, SNOW_MAX_TEMPERATURE};
use crate::weather::catalog::DescriptionTables;
use crate::weather::effects::is_foggy;
use crate::weather::weather_data::{Ruleset, Terrain, WeatherState};

/// Placeholder in precipitation phrases replaced by the concrete kind
pub const PRECIPITATION_TOKEN: &str = "rain/snow";

/// What actually falls from the sky
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationKind {
    Rain,
    Sleet,
    Snow,
}

impl PrecipitationKind {
    pub fn for_conditions(temperature: i32, ruleset: Ruleset) -> Self {
        if ruleset == Ruleset::ExtremeHeat {
            return PrecipitationKind::Rain;
        }
        if temperature <= SNOW_MAX_TEMPERATURE {
            PrecipitationKind::Snow
        } else if temperature <= SLEET_MAX_TEMPERATURE {
            PrecipitationKind::Sleet
        } else {
            PrecipitationKind::Rain
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrecipitationKind::Rain => "rain",
            PrecipitationKind::Sleet => "sleet",
            PrecipitationKind::Snow => "snow",
        }
    }
}

struct Context {
    ruleset: Ruleset,
    terrain: Terrain,
}

struct SpecialCondition {
    clause: &'static str,
    applies: fn(&WeatherState, &Context) -> bool,
}

// Evaluated in this order; every match contributes its clause.
const SPECIAL_CONDITIONS: [SpecialCondition; 5] = [
    SpecialCondition {
        clause: "razor-edged shards of glass are whipped through the air",
        applies: |state, ctx| {
            ctx.ruleset == Ruleset::ExtremeHeat && ctx.terrain == Terrain::Glass && state.wind() >= 6
        },
    },
    SpecialCondition {
        clause: "choking clouds of silt billow up from the basin",
        applies: |state, ctx| {
            ctx.ruleset == Ruleset::ExtremeHeat && ctx.terrain == Terrain::Silt && state.wind() >= 5
        },
    },
    SpecialCondition {
        clause: "a thick fog clings to the ground",
        applies: |state, ctx| ctx.ruleset == Ruleset::Standard && is_foggy(state),
    },
    SpecialCondition {
        clause: "thunder rolls as a storm breaks overhead",
        applies: |state, _| state.precipitation() >= 6 && state.wind() >= 4,
    },
    SpecialCondition {
        clause: "stinging dust and sand fill the air",
        applies: |state, _| state.wind() >= 7 && state.humidity() <= -5 && state.precipitation() <= 0,
    },
];

/// Turns states into prose using a catalog's phrase tables
pub struct DescriptionComposer<'a> {
    tables: &'a DescriptionTables,
}

impl<'a> DescriptionComposer<'a> {
    pub fn new(tables: &'a DescriptionTables) -> Self {
        Self { tables }
    }

    pub fn describe(&self, state: &WeatherState, ruleset: Ruleset, terrain: Terrain) -> String {
        let mut sentences = vec![self.base_sentence(state, ruleset)];

        if state.humidity().abs() > NOTABLE_HUMIDITY {
            sentences.push(self.tables.humidity.phrase(state.humidity()).to_string());
        }

        let clauses = special_clauses(state, ruleset, terrain);
        if !clauses.is_empty() {
            sentences.push(sentence(&clauses.join(" and ")));
        }

        sentences.join(" ")
    }

    fn base_sentence(&self, state: &WeatherState, ruleset: Ruleset) -> String {
        let temperature = self.tables.temperature_for(ruleset).phrase(state.temperature());
        let wind = self.tables.wind.phrase(state.wind());
        let kind = PrecipitationKind::for_conditions(state.temperature(), ruleset);
        let precipitation = self
            .tables
            .precipitation
            .phrase(state.precipitation())
            .replace(PRECIPITATION_TOKEN, kind.as_str());

        format!("It is {}, {}, and {}.", temperature, wind, precipitation)
    }
}

/// Clauses of every special condition that holds, in evaluation order
pub fn special_clauses(state: &WeatherState, ruleset: Ruleset, terrain: Terrain) -> Vec<&'static str> {
    let ctx = Context { ruleset, terrain };
    SPECIAL_CONDITIONS
        .iter()
        .filter(|condition| (condition.applies)(state, &ctx))
        .map(|condition| condition.clause)
        .collect()
}

fn sentence(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
