use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    requests::PlacesRequest,
    types::{place_result_item::PlaceResultItem, response_status::ResponseStatus},
    utils::error::ResponseError,
};

/// Parsed response of a Places API request.
///
/// Generic over the originating request `R`, so the next page request has the
/// same concrete type, and over the result item `I`, so callers can parse
/// fields the default [`PlaceResultItem`] does not carry.
#[derive(Debug, Clone)]
pub struct PlacesResponse<R, I = PlaceResultItem> {
    request: R,
    status: ResponseStatus,
    results: Vec<I>,
    next_page_token: Option<String>,
    html_attributions: Vec<String>,
    error_message: Option<String>,
}

impl<R, I: DeserializeOwned> PlacesResponse<R, I> {
    pub fn parse(payload: &Value, request: R) -> Result<Self, ResponseError> {
        Self::parse_with(payload, request, |item: &Value| I::deserialize(item))
    }
}

impl<R, I> PlacesResponse<R, I> {
    /// Parses the payload with a custom item parser. Items the parser rejects
    /// are skipped; the rest of the response is kept.
    pub fn parse_with<F, E>(
        payload: &Value,
        request: R,
        mut parse_item: F,
    ) -> Result<Self, ResponseError>
    where
        F: FnMut(&Value) -> Result<I, E>,
        E: Display,
    {
        let payload = payload.as_object().ok_or(ResponseError::NotAnObject)?;

        let status = match payload.get("status").and_then(Value::as_str) {
            Some(raw) => {
                let status = ResponseStatus::from_wire(raw);
                if status == ResponseStatus::Unknown {
                    warn!(status = raw, "Unrecognized places response status");
                }
                status
            }
            None => ResponseStatus::Unknown,
        };

        // Autocomplete answers with "predictions" instead of "results".
        let items = payload
            .get("results")
            .or_else(|| payload.get("predictions"))
            .and_then(Value::as_array);

        let results = items
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(index, item)| match parse_item(item) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(index, "Skipping malformed places result item: {}", e);
                    None
                }
            })
            .collect::<Vec<I>>();

        let next_page_token = payload
            .get("next_page_token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        let html_attributions = payload
            .get("html_attributions")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect::<Vec<String>>();

        let error_message = payload
            .get("error_message")
            .and_then(Value::as_str)
            .map(str::to_string);

        debug!(
            %status,
            results = results.len(),
            has_next_page = next_page_token.is_some(),
            "Parsed places response"
        );

        Ok(Self {
            request,
            status,
            results,
            next_page_token,
            html_attributions,
            error_message,
        })
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn results(&self) -> &[I] {
        &self.results
    }

    pub fn into_results(self) -> Vec<I> {
        self.results
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Attributions which must be displayed to the user alongside the results.
    pub fn html_attributions(&self) -> &[String] {
        &self.html_attributions
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}

impl<R: PlacesRequest, I> PlacesResponse<R, I> {
    /// Request for the next page of the same query, if the API returned a token.
    pub fn next_page_request(&self) -> Option<R> {
        self.next_page_token
            .as_deref()
            .map(|token| self.request.with_page_token(token))
    }
}
