pub mod places_client;
