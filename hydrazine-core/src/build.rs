//! Shape of a recommended build as produced by the external recommender.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::serde_helpers::{lenient_f64, lenient_opt_f64, lenient_u32};

/// What the recommender should optimise the route for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Shortest,
    Cheapest,
}

impl Priority {
    /// Phrase used when describing the priority to the recommender.
    pub fn describe(self) -> &'static str {
        match self {
            Priority::Shortest => "Shortest travel distance/time",
            Priority::Cheapest => "Lowest total UEC cost",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shortest" | "fastest" => Ok(Priority::Shortest),
            "cheapest" | "cheap" => Ok(Priority::Cheapest),
            _ => Err(format!("unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Shortest => write!(f, "shortest"),
            Priority::Cheapest => write!(f, "cheapest"),
        }
    }
}

/// A request sent to the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequest {
    pub ship_name: Option<String>,
    pub intent: String,
    pub start_location: String,
    #[serde(default)]
    pub priority: Priority,
}

/// A purchasable ship component and where to buy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_u32::deserialize")]
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_f64::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    pub location: String,
    pub shop_name: String,
}

impl Component {
    /// Short marker label: first letter of the type and last word of the name.
    pub fn marker_label(&self) -> String {
        let initial = self.kind.chars().next().map(String::from).unwrap_or_default();
        let last_word = self.name.split(' ').next_back().unwrap_or_default();
        format!("{}: {}", initial, last_word)
    }
}

/// A complete recommended loadout and shopping route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutBuild {
    pub ship: String,
    #[serde(default)]
    pub goal: String,
    pub components: Vec<Component>,
    #[serde(default, deserialize_with = "lenient_f64::deserialize")]
    pub total_cost: f64,
    /// Waypoints in travel order, starting with the start location.
    pub route: Vec<String>,
    #[serde(default, deserialize_with = "lenient_u32::deserialize")]
    pub total_jumps: u32,
    #[serde(default)]
    pub estimated_travel_time: String,
}

impl LoadoutBuild {
    /// Sum of the listed component prices, ignoring unpriced entries.
    pub fn priced_total(&self) -> f64 {
        self.components.iter().filter_map(|c| c.price).sum()
    }
}

/// Outcome of decoding a recommender payload.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildPayload {
    Decoded(LoadoutBuild),
    Malformed { diagnostic: String },
}

impl BuildPayload {
    pub fn into_result(self) -> Result<LoadoutBuild, String> {
        match self {
            BuildPayload::Decoded(build) => Ok(build),
            BuildPayload::Malformed { diagnostic } => Err(diagnostic),
        }
    }
}

/// Decodes a build from raw recommender text.
///
/// The text may wrap the JSON object in prose or code fences; the outermost
/// `{ ... }` span is decoded.
pub fn decode_build(text: &str) -> BuildPayload {
    let Some(json) = outer_object(text) else {
        return BuildPayload::Malformed {
            diagnostic: "no JSON object in payload".to_string(),
        };
    };

    match serde_json::from_str::<LoadoutBuild>(json) {
        Ok(build) => BuildPayload::Decoded(build),
        Err(e) => {
            debug!(error = %e, "malformed build payload");
            BuildPayload::Malformed {
                diagnostic: e.to_string(),
            }
        }
    }
}

fn outer_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ship": "Avenger Titan",
        "goal": "Maximum DPS Combat",
        "components": [
            {"name": "CF-227 Badger Repeater", "type": "Weapon", "size": 2,
             "location": "Area18", "shopName": "Center Mass", "price": 9000},
            {"name": "FR-66", "type": "Shield", "size": 1.0,
             "location": "Lorville", "shopName": "Cubby Blast", "description": "Sturdy"}
        ],
        "totalCost": 9000,
        "route": ["Seraphim Station", "Area18", "Lorville"],
        "totalJumps": 2,
        "estimatedTravelTime": "25 minutes"
    }"#;

    #[test]
    fn decodes_camel_case_payload() {
        let build = decode_build(SAMPLE).into_result().unwrap();
        assert_eq!(build.ship, "Avenger Titan");
        assert_eq!(build.components.len(), 2);
        assert_eq!(build.components[0].kind, "Weapon");
        assert_eq!(build.components[0].shop_name, "Center Mass");
        assert_eq!(build.components[1].size, 1);
        assert_eq!(build.components[1].price, None);
        assert_eq!(build.total_jumps, 2);
        assert_eq!(build.priced_total(), 9000.0);
    }

    #[test]
    fn string_price_keeps_payload_usable() {
        let payload = r#"{
            "ship": "Cutlass Black",
            "components": [
                {"name": "Bracer", "type": "Cooler", "location": "Yela",
                 "shopName": "Skutters", "price": "9000"},
                {"name": "Snowfall", "type": "Cooler", "location": "Yela",
                 "shopName": "Skutters", "price": "9,000"}
            ],
            "route": ["Yela"]
        }"#;
        let build = decode_build(payload).into_result().unwrap();
        assert_eq!(build.components[0].price, Some(9000.0));
        assert_eq!(build.components[1].price, Some(9000.0));
        assert_eq!(build.route, vec!["Yela"]);
    }

    #[test]
    fn strips_code_fences() {
        let wrapped = format!("Here is your build:\n```json\n{}\n```", SAMPLE);
        assert!(matches!(decode_build(&wrapped), BuildPayload::Decoded(_)));
    }

    #[test]
    fn missing_fields_are_malformed() {
        let payload = decode_build(r#"{"ship": "Gladius"}"#);
        match payload {
            BuildPayload::Malformed { diagnostic } => assert!(diagnostic.contains("components")),
            other => panic!("expected malformed, got {:?}", other),
        }
        assert!(matches!(
            decode_build("service unavailable"),
            BuildPayload::Malformed { .. }
        ));
    }

    #[test]
    fn marker_label_uses_type_initial_and_last_word() {
        let build = decode_build(SAMPLE).into_result().unwrap();
        assert_eq!(build.components[0].marker_label(), "W: Repeater");
        assert_eq!(build.components[1].marker_label(), "S: FR-66");
    }

    #[test]
    fn priority_round_trips_through_text() {
        assert_eq!("Cheapest".parse::<Priority>().unwrap(), Priority::Cheapest);
        assert_eq!(Priority::Shortest.to_string(), "shortest");
        assert!("slowest".parse::<Priority>().is_err());
    }
}
