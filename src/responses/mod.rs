pub mod places_response;
