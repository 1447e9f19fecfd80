pub mod lat_long_location;
pub mod place_result_item;
pub mod place_type;
pub mod response_status;
