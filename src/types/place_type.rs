use serde::{Deserialize, Serialize};

/// Restricts which kind of places the autocomplete service returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AutocompletePlaceType {
    /// Geocoding (address) results only.
    #[serde(rename = "geocode")]
    Geocode,
    /// Business results only.
    #[serde(rename = "establishment")]
    Establishment,
    /// Localities, sublocalities, postal codes, countries and first/second level
    /// administrative areas.
    #[serde(rename = "(regions)")]
    Regions,
    /// Localities and third level administrative areas.
    #[serde(rename = "(cities)")]
    Cities,
}

impl AutocompletePlaceType {
    pub const ALL: [AutocompletePlaceType; 4] = [
        AutocompletePlaceType::Geocode,
        AutocompletePlaceType::Establishment,
        AutocompletePlaceType::Regions,
        AutocompletePlaceType::Cities,
    ];

    pub fn as_param(self) -> &'static str {
        match self {
            AutocompletePlaceType::Geocode => "geocode",
            AutocompletePlaceType::Establishment => "establishment",
            AutocompletePlaceType::Regions => "(regions)",
            AutocompletePlaceType::Cities => "(cities)",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_param() == param)
    }
}
