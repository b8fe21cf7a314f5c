//! # multiples-app
//!
//! Classifies every integer from 0 to a bound by which of 3, 5 and 7 divide
//! it, and serves the result as a small educational web page.
//!
//! ## Usage
//!
//! ### As a Library
//! ```rust
//! use multiples_app::classify;
//!
//! let result = classify(15);
//! let fifteen = result.get(15).unwrap();
//! assert_eq!(fifteen.divisors(), &[3, 5]);
//! assert_eq!(fifteen.primary_divisor(), Some(3));
//! ```
//!
//! ### Starting the Server
//! ```rust,ignore
//! use multiples_app::{server, Config};
//!
//! server::run(Config::default()).await?;
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

// Re-export key types
pub use classifier::{classify, ClassificationRecord, ClassificationResult};
pub use config::Config;
pub use error::{Error, Result};
pub use services::{parse_bound, validate_bound, CalculatorService};
pub use types::divisor::{rule_for, DisplayColor, DivisorRule, DIVISOR_TABLE};

/// Main application facade
pub struct MultiplesApp {
    config: Config,
    calculator: CalculatorService,
}

impl MultiplesApp {
    pub fn new(config: Config) -> Self {
        let calculator = CalculatorService::new(config.clone());
        Self { config, calculator }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the calculator service
    pub fn calculator(&self) -> &CalculatorService {
        &self.calculator
    }
}
