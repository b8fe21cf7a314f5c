use std::sync::Arc;

use tokio::sync::RwLock;

use crate::classifier::{classify, ClassificationResult};
use crate::config::Config;
use crate::Result;

use super::bound::{parse_bound, validate_bound};

/// Validates bounds, runs the classifier and keeps the last result for
/// display. A failed calculation never touches the stored result.
pub struct CalculatorService {
    config: Config,
    last_result: RwLock<Option<Arc<ClassificationResult>>>,
}

impl CalculatorService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            last_result: RwLock::new(None),
        }
    }

    pub fn max_bound(&self) -> u64 {
        self.config.calculator.max_bound
    }

    /// Parse raw input and classify it
    pub async fn calculate(&self, input: &str) -> Result<Arc<ClassificationResult>> {
        let bound = parse_bound(input).inspect_err(|e| {
            tracing::warn!("Rejected calculator input: {}", e);
        })?;
        self.calculate_bound(bound).await
    }

    /// Classify an already-parsed bound
    pub async fn calculate_bound(&self, bound: u64) -> Result<Arc<ClassificationResult>> {
        let bound = validate_bound(bound, self.max_bound()).inspect_err(|e| {
            tracing::warn!("Rejected calculator bound: {}", e);
        })?;

        let result = Arc::new(classify(bound));
        tracing::debug!(bound, records = result.len(), "Classified range");

        *self.last_result.write().await = Some(result.clone());
        Ok(result)
    }

    /// Most recent successful result, if any
    pub async fn last_result(&self) -> Option<Arc<ClassificationResult>> {
        self.last_result.read().await.clone()
    }
}
