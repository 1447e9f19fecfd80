//! Typed requests and responses for the Google Places web service.
//!
//! Requests encode themselves into query parameters through [`PlacesRequest`];
//! [`PlacesResponse`] parses a decoded JSON payload and builds the request for
//! the next page. [`PlacesService`] ties the two together over `reqwest`.

pub mod requests;
pub mod responses;
pub mod services;
pub mod types;
pub mod utils;

pub use requests::{
    autocomplete_request::AutocompleteRequest, text_search_request::TextSearchRequest,
    DefaultLanguage, FixedLanguage, NoDefaultLanguage, PlacesRequest, RequestParams,
};
pub use responses::places_response::PlacesResponse;
pub use services::places_client::{
    places_service::{PlacesService, PlacesServiceConfig},
    types::places_service_error::PlacesServiceError,
};
pub use types::{
    lat_long_location::LatLongLocation, place_result_item::PlaceResultItem,
    place_type::AutocompletePlaceType, response_status::ResponseStatus,
};
pub use utils::error::{RequestError, ResponseError};
