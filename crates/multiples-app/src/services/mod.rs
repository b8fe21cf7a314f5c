pub mod bound;
mod calculator;

pub use bound::{parse_bound, validate_bound};
pub use calculator::CalculatorService;
