use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A latitude/longitude pair, as used for location bias and result geometry.
#[derive(Debug, Clone, Copy, PartialEq, Validate, Deserialize, Serialize)]
#[validate(schema(function = "validate_finite"))]
pub struct LatLongLocation {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    #[serde(alias = "lon")]
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lng: f64,
}

impl LatLongLocation {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Formats as `<lat>,<lng>` without truncating either coordinate.
    pub fn to_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

// NaN slips through `range`, since every comparison with it is false.
fn validate_finite(location: &LatLongLocation) -> Result<(), ValidationError> {
    if location.lat.is_finite() && location.lng.is_finite() {
        return Ok(());
    }

    let mut err = ValidationError::new("finite");
    err.message = Some(Cow::from("Coordinates must be finite numbers"));
    Err(err)
}
