//! Divisibility classification of the range `0..=bound`.
//!
//! [`classify`] is pure: it only reads [`DIVISOR_TABLE`] and returns a fresh
//! [`ClassificationResult`]. Validation of the bound happens before it is
//! called (see [`crate::services::bound`]).

use serde::Serialize;

use crate::types::divisor::{DisplayColor, DIVISOR_TABLE};

/// Classification of a single number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    number: u64,
    divisors: Vec<u64>,
    primary_divisor: Option<u64>,
}

impl ClassificationRecord {
    fn new(number: u64) -> Self {
        let divisors: Vec<u64> = DIVISOR_TABLE
            .iter()
            .map(|rule| rule.divisor)
            .filter(|divisor| number % divisor == 0)
            .collect();
        // The table is ascending, so the first match is the minimum.
        let primary_divisor = divisors.first().copied();

        Self {
            number,
            divisors,
            primary_divisor,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Matching divisors in ascending order
    pub fn divisors(&self) -> &[u64] {
        &self.divisors
    }

    pub fn primary_divisor(&self) -> Option<u64> {
        self.primary_divisor
    }

    pub fn is_multiple_of(&self, divisor: u64) -> bool {
        self.divisors.contains(&divisor)
    }

    pub fn color(&self) -> DisplayColor {
        DisplayColor::for_primary(self.primary_divisor)
    }
}

/// Ordered records for `0..=bound`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    bound: u64,
    records: Vec<ClassificationRecord>,
}

impl ClassificationResult {
    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ClassificationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassificationRecord> {
        self.records.iter()
    }

    /// Record for `number`, if it lies in range
    pub fn get(&self, number: u64) -> Option<&ClassificationRecord> {
        usize::try_from(number)
            .ok()
            .and_then(|index| self.records.get(index))
    }

    /// How many numbers in range are multiples of `divisor`
    pub fn count_for(&self, divisor: u64) -> usize {
        self.records
            .iter()
            .filter(|record| record.is_multiple_of(divisor))
            .count()
    }
}

impl<'a> IntoIterator for &'a ClassificationResult {
    type Item = &'a ClassificationRecord;
    type IntoIter = std::slice::Iter<'a, ClassificationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Classify every integer in `0..=bound` against 3, 5 and 7.
///
/// Returns exactly `bound + 1` records in ascending order. Zero is a
/// multiple of every divisor.
pub fn classify(bound: u64) -> ClassificationResult {
    let records = (0..=bound).map(ClassificationRecord::new).collect();
    ClassificationResult { bound, records }
}
