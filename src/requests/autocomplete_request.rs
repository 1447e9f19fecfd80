use std::borrow::Cow;

use validator::{Validate, ValidationError};

use super::{resolve_language, DefaultLanguage, PlacesRequest, RequestParams};
use crate::{
    types::{lat_long_location::LatLongLocation, place_type::AutocompletePlaceType},
    utils::{error::RequestError, validated::validated},
};

/// Place Autocomplete request.
///
/// Returns place predictions for a partial text input, typically as the
/// user types. See <https://developers.google.com/places/web-service/autocomplete>.
#[derive(Debug, Clone, PartialEq, Validate)]
#[validate(schema(function = "validate_country"))]
pub struct AutocompleteRequest {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    input: String,

    offset: Option<usize>,

    location: Option<LatLongLocation>,

    radius: Option<u32>,

    language: Option<String>,

    place_type: Option<AutocompletePlaceType>,

    #[validate(length(equal = 2, message = "Must be a two letter country code"))]
    country: Option<String>,

    page_token: Option<String>,
}

impl AutocompleteRequest {
    pub fn new(input: impl Into<String>) -> Result<Self, RequestError> {
        validated(Self {
            input: input.into(),
            offset: None,
            location: None,
            radius: None,
            language: None,
            place_type: None,
            country: None,
            page_token: None,
        })
    }

    /// Position of the caret in `input`. Only the text up to this character
    /// is matched; the whole input is used when unset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_location(mut self, location: LatLongLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Biases (but does not restrict) results to this many meters around the location.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_place_type(mut self, place_type: AutocompletePlaceType) -> Self {
        self.place_type = Some(place_type);
        self
    }

    /// ISO 3166-1 Alpha-2 country code, sent as `components=country:<code>`.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn location(&self) -> Option<LatLongLocation> {
        self.location
    }

    pub fn radius(&self) -> Option<u32> {
        self.radius
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn place_type(&self) -> Option<AutocompletePlaceType> {
        self.place_type
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

fn validate_country(request: &AutocompleteRequest) -> Result<(), ValidationError> {
    match request.country {
        Some(ref country) if !country.chars().all(|c| c.is_ascii_alphabetic()) => {
            let mut err = ValidationError::new("country");
            err.message = Some(Cow::from("Must be a two letter country code"));
            Err(err)
        }
        _ => Ok(()),
    }
}

impl PlacesRequest for AutocompleteRequest {
    fn kind(&self) -> &'static str {
        "autocomplete"
    }

    fn params_with(&self, defaults: &dyn DefaultLanguage) -> Result<RequestParams, RequestError> {
        self.validate()?;

        let mut params = RequestParams::new();
        params.insert("input".to_string(), self.input.clone());

        if let Some(offset) = self.offset {
            let len = self.input.chars().count();
            if offset > len {
                return Err(RequestError::OffsetOutOfRange { offset, len });
            }
            params.insert("offset".to_string(), offset.to_string());
        }

        if let Some(location) = self.location {
            location.validate()?;
            params.insert("location".to_string(), location.to_param());
        }

        if let Some(radius) = self.radius {
            params.insert("radius".to_string(), radius.to_string());
        }

        if let Some(language) = resolve_language(self.language.as_deref(), defaults) {
            params.insert("language".to_string(), language);
        }

        if let Some(place_type) = self.place_type {
            params.insert("types".to_string(), place_type.as_param().to_string());
        }

        if let Some(ref country) = self.country {
            params.insert(
                "components".to_string(),
                format!("country:{}", country.to_ascii_lowercase()),
            );
        }

        if let Some(ref token) = self.page_token {
            params.insert("pagetoken".to_string(), token.clone());
        }

        Ok(params)
    }

    fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    fn with_page_token(&self, token: &str) -> Self {
        Self {
            page_token: Some(token.to_string()),
            ..self.clone()
        }
    }
}
