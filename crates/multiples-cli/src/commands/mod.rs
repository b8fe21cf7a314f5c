pub mod classify;
pub mod config;
pub mod divisors;
pub mod serve;
