pub mod places_service_error;
