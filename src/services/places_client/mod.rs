pub mod places_service;
pub mod types;
