pub mod api;
pub mod divisor;
