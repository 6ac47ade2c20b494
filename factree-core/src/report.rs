//! Shared report types for factorization results
//!
//! Serializable summaries for external collaborators (drivers, services,
//! logs). A report is a flat projection of one node: classification, flags,
//! and the raw divisor entry values in discovery order.

use crate::error::Result;
use crate::factor::FactorNode;
use serde::{Deserialize, Serialize};

/// Summary of one factored number.
///
/// # Examples
///
/// ```
/// use factree_core::FactorNode;
///
/// let report = FactorNode::new(12).unwrap().report();
/// assert_eq!(report.value, 12);
/// assert_eq!(report.divisors, vec![12, 6, 4]);
/// assert!(!report.prime);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorReport {
    /// The factored value
    pub value: i64,
    /// Prime classification from the discovered divisor structure
    pub prime: bool,
    /// Whether the square-root search bound was in effect
    pub use_threshold: bool,
    /// Raw divisor entry count, self entry included
    pub divisor_count: usize,
    /// Divisor entry values in discovery order, self entry first
    pub divisors: Vec<i64>,
}

impl FactorNode {
    /// Build a serializable report for this node.
    pub fn report(&self) -> FactorReport {
        FactorReport {
            value: self.value(),
            prime: self.is_prime(),
            use_threshold: self.use_threshold(),
            divisor_count: self.divisor_count(),
            divisors: self
                .raw_entries()
                .iter()
                .map(|entry| self.entry_value(entry))
                .collect(),
        }
    }
}

impl FactorReport {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
