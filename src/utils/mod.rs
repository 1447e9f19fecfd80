pub mod error;
pub mod validated;
