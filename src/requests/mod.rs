use std::collections::BTreeMap;

use tracing::debug;
use urlencoding::encode;

use crate::utils::error::RequestError;

pub mod autocomplete_request;
pub mod text_search_request;

/// Query parameters of a request, keyed by API parameter name.
pub type RequestParams = BTreeMap<String, String>;

/// Supplies the language used when a request does not set one explicitly.
pub trait DefaultLanguage {
    fn default_language(&self) -> Option<String>;
}

pub struct NoDefaultLanguage;

impl DefaultLanguage for NoDefaultLanguage {
    fn default_language(&self) -> Option<String> {
        None
    }
}

pub struct FixedLanguage(pub String);

impl DefaultLanguage for FixedLanguage {
    fn default_language(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Capability shared by every Places API request: encoding itself into query
/// parameters and producing a copy of itself for the next page of results.
pub trait PlacesRequest: Clone {
    /// Endpoint name under `/maps/api/place/`, e.g. `autocomplete`.
    fn kind(&self) -> &'static str;

    fn params_with(&self, defaults: &dyn DefaultLanguage) -> Result<RequestParams, RequestError>;

    fn page_token(&self) -> Option<&str>;

    fn with_page_token(&self, token: &str) -> Self;

    fn params(&self) -> Result<RequestParams, RequestError> {
        self.params_with(&NoDefaultLanguage)
    }

    fn query_string(&self, defaults: &dyn DefaultLanguage) -> Result<String, RequestError> {
        Ok(encode_params(&self.params_with(defaults)?))
    }

    fn url(
        &self,
        host: &str,
        api_key: &str,
        defaults: &dyn DefaultLanguage,
    ) -> Result<String, RequestError> {
        let query = self.query_string(defaults)?;
        debug!(kind = self.kind(), query = %query, "Encoded places request");

        Ok(format!(
            "{}/maps/api/place/{}/json?{}&key={}",
            host.trim_end_matches('/'),
            self.kind(),
            query,
            encode(api_key)
        ))
    }
}

pub(crate) fn encode_params(params: &RequestParams) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
        .collect::<Vec<String>>()
        .join("&")
}

/// Explicit language wins; empty strings count as unset.
pub(crate) fn resolve_language(
    explicit: Option<&str>,
    defaults: &dyn DefaultLanguage,
) -> Option<String> {
    match explicit {
        Some(language) if !language.is_empty() => Some(language.to_string()),
        _ => defaults.default_language().filter(|l| !l.is_empty()),
    }
}
