use validator::Validate;

use super::{resolve_language, DefaultLanguage, PlacesRequest, RequestParams};
use crate::{
    types::lat_long_location::LatLongLocation,
    utils::{error::RequestError, validated::validated},
};

/// Text Search request: places matching a free-form query such as
/// "pizza in New York". Independent from [`AutocompleteRequest`] on purpose;
/// the two only share the [`PlacesRequest`] capability.
///
/// [`AutocompleteRequest`]: super::autocomplete_request::AutocompleteRequest
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct TextSearchRequest {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    query: String,

    location: Option<LatLongLocation>,

    radius: Option<u32>,

    language: Option<String>,

    #[validate(range(max = 4, message = "Price level must be between 0 and 4"))]
    min_price: Option<u8>,

    #[validate(range(max = 4, message = "Price level must be between 0 and 4"))]
    max_price: Option<u8>,

    open_now: bool,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    place_type: Option<String>,

    page_token: Option<String>,
}

impl TextSearchRequest {
    pub fn new(query: impl Into<String>) -> Result<Self, RequestError> {
        validated(Self {
            query: query.into(),
            location: None,
            radius: None,
            language: None,
            min_price: None,
            max_price: None,
            open_now: false,
            place_type: None,
            page_token: None,
        })
    }

    pub fn with_location(mut self, location: LatLongLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Price levels range from 0 (most affordable) to 4 (most expensive).
    pub fn with_price_range(mut self, min_price: Option<u8>, max_price: Option<u8>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_open_now(mut self, open_now: bool) -> Self {
        self.open_now = open_now;
        self
    }

    /// A single place type such as `cafe` or `museum`.
    pub fn with_place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    pub fn query(&self) -> &str {
        &self.query
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

    pub fn open_now(&self) -> bool {
        self.open_now
    }

    pub fn place_type(&self) -> Option<&str> {
        self.place_type.as_deref()
    }
}

impl PlacesRequest for TextSearchRequest {
    fn kind(&self) -> &'static str {
        "textsearch"
    }

    fn params_with(&self, defaults: &dyn DefaultLanguage) -> Result<RequestParams, RequestError> {
        self.validate()?;

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(RequestError::PriceRange { min, max });
            }
        }

        let mut params = RequestParams::new();
        params.insert("query".to_string(), self.query.clone());

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

        if let Some(min_price) = self.min_price {
            params.insert("minprice".to_string(), min_price.to_string());
        }

        if let Some(max_price) = self.max_price {
            params.insert("maxprice".to_string(), max_price.to_string());
        }

        // The API treats any value as true, so the flag is only sent when set.
        if self.open_now {
            params.insert("opennow".to_string(), "true".to_string());
        }

        if let Some(ref place_type) = self.place_type {
            params.insert("types".to_string(), place_type.clone());
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
