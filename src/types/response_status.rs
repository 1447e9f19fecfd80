use std::fmt;

/// Status codes returned in the `status` field of a Places API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseStatus {
    /// Only used when the payload carries a status this client does not know.
    #[default]
    Unknown,
    Ok,
    NoResults,
    ApiLimitExceeded,
    RequestDenied,
    InvalidRequest,
}

impl ResponseStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "OK" => ResponseStatus::Ok,
            "ZERO_RESULTS" => ResponseStatus::NoResults,
            "OVER_QUERY_LIMIT" => ResponseStatus::ApiLimitExceeded,
            "REQUEST_DENIED" => ResponseStatus::RequestDenied,
            "INVALID_REQUEST" => ResponseStatus::InvalidRequest,
            _ => ResponseStatus::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseStatus::Unknown => "UNKNOWN",
            ResponseStatus::Ok => "OK",
            ResponseStatus::NoResults => "ZERO_RESULTS",
            ResponseStatus::ApiLimitExceeded => "OVER_QUERY_LIMIT",
            ResponseStatus::RequestDenied => "REQUEST_DENIED",
            ResponseStatus::InvalidRequest => "INVALID_REQUEST",
        }
    }

    pub fn localized_name(self) -> &'static str {
        match self {
            ResponseStatus::Ok => "OK",
            ResponseStatus::NoResults => "No results",
            ResponseStatus::ApiLimitExceeded => "API limit exceeded",
            ResponseStatus::RequestDenied => "Request denied",
            ResponseStatus::InvalidRequest => "Invalid request",
            ResponseStatus::Unknown => "Unknown status",
        }
    }

    pub fn localized_description(self) -> &'static str {
        match self {
            ResponseStatus::Ok => "No errors occurred, the place was successfully detected.",
            ResponseStatus::NoResults => {
                "The search was successful but returned no results. This may occur if the search was passed a location in a remote place."
            }
            ResponseStatus::ApiLimitExceeded => "You are over your request quota.",
            ResponseStatus::RequestDenied => {
                "The request was denied, generally because of a missing or invalid API key."
            }
            ResponseStatus::InvalidRequest => {
                "The request is missing a required parameter, such as the search text."
            }
            ResponseStatus::Unknown => "The service returned a status this client does not recognize.",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.localized_name())
    }
}
