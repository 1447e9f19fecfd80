use serde::{Deserialize, Serialize};

use super::lat_long_location::LatLongLocation;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceResultItemStructuredFormatting {
    pub main_text: String,
    #[serde(default)]
    pub secondary_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceResultItemGeometry {
    pub location: LatLongLocation,
}

/// Default result item. Covers both text search results and autocomplete
/// predictions; anything beyond `place_id` is optional.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceResultItem {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub geometry: Option<PlaceResultItemGeometry>,
    #[serde(default)]
    pub structured_formatting: Option<PlaceResultItemStructuredFormatting>,
}

impl PlaceResultItem {
    pub fn location(&self) -> Option<LatLongLocation> {
        self.geometry.as_ref().map(|g| g.location)
    }

    /// Best text to show for this item: the place name for search results,
    /// the main text for predictions.
    pub fn display_text(&self) -> &str {
        self.name
            .as_deref()
            .or(self.structured_formatting.as_ref().map(|f| f.main_text.as_str()))
            .or(self.description.as_deref())
            .unwrap_or(&self.place_id)
    }
}
