//! Factorization tree construction and divisor queries
//!
//! A [`FactorNode`] eagerly decomposes a positive integer into its divisors at
//! construction time: each divisor `i` discovered in ascending order from 2
//! contributes a child node holding the quotient `value / i`, and every child
//! is decomposed the same way. The resulting object graph IS the factorization
//! tree; there is no lazy evaluation and no sharing of subtrees (equal
//! quotients reached along different branches are recomputed independently).
//!
//! # Search threshold
//!
//! With `use_threshold` enabled (the default) the divisor search stops at
//! `floor(sqrt(value))`; disabled, it scans the full `2..=value` range, which
//! degrades to O(value) work for large primes but additionally discovers the
//! quotient 1 at `i == value`.
//!
//! # Recursion guards
//!
//! Construction is depth-first recursion. [`FactorLimits`] bounds both the
//! recursion depth and the total node count; exceeding either aborts the
//! whole construction with an error, so a successfully built tree is always
//! complete and every derived query on it is total.

use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Default maximum recursion depth for tree construction.
///
/// Every quotient is at most half its parent, so trees over 64-bit values
/// stay below ~63 levels; the default leaves generous headroom.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Default maximum total node count for one tree.
///
/// Highly composite inputs multiply out quickly because subtrees are never
/// shared; the cap keeps memory bounded.
pub const DEFAULT_MAX_NODES: usize = 1_000_000;

/// Construction guards bounding recursion depth and total node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorLimits {
    /// Maximum recursion depth before construction fails
    pub max_depth: usize,
    /// Maximum total nodes in one tree before construction fails
    pub max_nodes: usize,
}

impl Default for FactorLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

/// Construction options: search bound policy plus recursion guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorOptions {
    /// Bound divisor search by `floor(sqrt(value))` instead of `value`
    pub use_threshold: bool,
    /// Recursion guards
    pub limits: FactorLimits,
}

impl Default for FactorOptions {
    /// Threshold search with default guard limits
    fn default() -> Self {
        Self {
            use_threshold: true,
            limits: FactorLimits::default(),
        }
    }
}

/// One entry in a node's ordered divisor list.
///
/// The list always opens with a synthetic [`SelfMarker`](DivisorEntry::SelfMarker)
/// standing for the node itself. The marker participates in counting and in
/// the primality branches but is skipped by the tree-rendering walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisorEntry {
    /// Synthetic self entry occupying index 0
    SelfMarker,
    /// Child subtree holding the quotient `value / i` for a discovered divisor `i`
    Quotient(FactorNode),
}

/// One integer's factorization, computed eagerly at construction.
///
/// Construction performs the divisor search and recursively builds a fully
/// independent subtree per discovered quotient; the node is immutable
/// afterwards. Cloning reconstructs new trees rather than copying references.
///
/// # Examples
///
/// ```
/// use factree_core::FactorNode;
///
/// let twelve = FactorNode::new(12).unwrap();
/// assert!(!twelve.is_prime());
/// assert_eq!(twelve.divisor_count(), 3); // self marker plus quotients 6 and 4
///
/// let seven = FactorNode::new(7).unwrap();
/// assert!(seven.is_prime());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorNode {
    value: i64,
    use_threshold: bool,
    entries: Vec<DivisorEntry>,
}

// ========================================
// Construction
// ========================================

impl FactorNode {
    /// Factor `value` with the square-root search bound and default limits.
    ///
    /// Fails with [`Error::InvalidInput`] when `value <= 0`.
    pub fn new(value: i64) -> Result<Self> {
        Self::with_options(value, &FactorOptions::default())
    }

    /// Factor `value` with an explicit search bound policy.
    pub fn with_threshold(value: i64, use_threshold: bool) -> Result<Self> {
        Self::with_options(
            value,
            &FactorOptions {
                use_threshold,
                ..FactorOptions::default()
            },
        )
    }

    /// Factor `value` under the given options.
    ///
    /// The whole subtree is built before this returns; a tripped guard limit
    /// discards everything built so far and surfaces as an error, never as a
    /// truncated tree.
    pub fn with_options(value: i64, options: &FactorOptions) -> Result<Self> {
        if value <= 0 {
            return Err(Error::InvalidInput(format!(
                "factorization requires a positive value, got {}",
                value
            )));
        }

        let mut nodes = 0usize;
        let root = Self::build(value, options.use_threshold, &options.limits, 0, &mut nodes)?;
        debug!(
            "Factored {} into {} divisor entries ({} tree nodes)",
            value,
            root.entries.len(),
            nodes
        );
        Ok(root)
    }

    fn build(
        value: i64,
        use_threshold: bool,
        limits: &FactorLimits,
        depth: usize,
        nodes: &mut usize,
    ) -> Result<Self> {
        if depth >= limits.max_depth {
            return Err(Error::DepthLimit(limits.max_depth));
        }
        *nodes += 1;
        if *nodes > limits.max_nodes {
            return Err(Error::NodeLimit(limits.max_nodes));
        }

        let mut entries = vec![DivisorEntry::SelfMarker];
        let limit = if use_threshold {
            integer_sqrt(value)
        } else {
            value
        };
        for i in 2..=limit {
            if value % i == 0 {
                trace!("Divisor {} of {} found (quotient {})", i, value, value / i);
                let child = Self::build(value / i, use_threshold, limits, depth + 1, nodes)?;
                entries.push(DivisorEntry::Quotient(child));
            }
        }

        Ok(Self {
            value,
            use_threshold,
            entries,
        })
    }

    /// Reconstruction path used by the cloning operations.
    ///
    /// Values arriving here already sit inside a tree the guards admitted, and
    /// rebuilding the same `(value, use_threshold)` pair reproduces the same
    /// finite shape, so no guard or input re-check is needed.
    fn rebuilt(value: i64, use_threshold: bool) -> Self {
        let mut entries = vec![DivisorEntry::SelfMarker];
        let limit = if use_threshold {
            integer_sqrt(value)
        } else {
            value
        };
        for i in 2..=limit {
            if value % i == 0 {
                entries.push(DivisorEntry::Quotient(Self::rebuilt(value / i, use_threshold)));
            }
        }
        Self {
            value,
            use_threshold,
            entries,
        }
    }
}

// ========================================
// Derived queries
// ========================================

impl FactorNode {
    /// The factored value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Whether the square-root search bound was in effect.
    pub fn use_threshold(&self) -> bool {
        self.use_threshold
    }

    /// Raw divisor entry count, self marker included.
    pub fn divisor_count(&self) -> usize {
        self.entries.len()
    }

    /// The raw entry list: the counting/primality view.
    pub fn raw_entries(&self) -> &[DivisorEntry] {
        &self.entries
    }

    /// The quotient subtrees in discovery order: the rendering view, which
    /// skips the self marker.
    pub fn quotients(&self) -> impl Iterator<Item = &FactorNode> {
        self.entries.iter().filter_map(|entry| match entry {
            DivisorEntry::SelfMarker => None,
            DivisorEntry::Quotient(node) => Some(node),
        })
    }

    /// Numeric value an entry stands for: this node's own value for the self
    /// marker, the child's value for a quotient.
    pub fn entry_value(&self, entry: &DivisorEntry) -> i64 {
        match entry {
            DivisorEntry::SelfMarker => self.value,
            DivisorEntry::Quotient(node) => node.value,
        }
    }

    /// Prime classification from the discovered divisor structure.
    ///
    /// This is an enumeration of the small entry-list shapes the discovery
    /// loop can produce, not a general primality test: with the threshold
    /// enabled a prime's search range is empty, and with it disabled a prime's
    /// only quotient is 1 (found at `i == value`).
    ///
    /// # Examples
    ///
    /// ```
    /// use factree_core::FactorNode;
    ///
    /// assert!(FactorNode::new(13).unwrap().is_prime());
    /// assert!(FactorNode::with_threshold(13, false).unwrap().is_prime());
    /// assert!(!FactorNode::new(100).unwrap().is_prime());
    /// assert!(FactorNode::new(1).unwrap().is_prime());
    /// ```
    pub fn is_prime(&self) -> bool {
        match self.entries.len() {
            0 => true,
            1 => {
                let v = self.entry_value(&self.entries[0]);
                v == self.value || v == 1
            }
            2 => {
                let first = self.entry_value(&self.entries[0]);
                let last = self.entry_value(&self.entries[1]);
                (first == self.value || first == 1) && (last == self.value || last == 1)
            }
            _ => false,
        }
    }

    /// Deep copy by reconstruction from `(value, use_threshold)`.
    ///
    /// The copy shares no subtree state with the original.
    pub fn deep_clone(&self) -> Self {
        Self::rebuilt(self.value, self.use_threshold)
    }

    /// Deep-copied clones of the divisor entries, one per raw entry in order.
    ///
    /// With `cut_bounds`, entries whose value equals 1 or equals this node's
    /// value are excluded; the self marker always falls to the cut.
    ///
    /// # Examples
    ///
    /// ```
    /// use factree_core::FactorNode;
    ///
    /// let twelve = FactorNode::new(12).unwrap();
    /// let values: Vec<i64> = twelve.clone_divisors(true).iter().map(|n| n.value()).collect();
    /// assert_eq!(values, vec![6, 4]);
    /// ```
    pub fn clone_divisors(&self, cut_bounds: bool) -> Vec<FactorNode> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let v = self.entry_value(entry);
                if cut_bounds && (v == self.value || v == 1) {
                    return None;
                }
                Some(Self::rebuilt(v, self.use_threshold))
            })
            .collect()
    }
}

/// Integer square root by correction around the floating-point estimate.
///
/// `f64` carries 53 mantissa bits, so the raw cast can be off by one for
/// large 64-bit inputs; the adjustment loops restore `floor(sqrt(value))`
/// exactly.
fn integer_sqrt(value: i64) -> i64 {
    let mut root = (value as f64).sqrt() as i64;
    while root > 0 && root.saturating_mul(root) > value {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .is_some_and(|sq| sq <= value)
    {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_rejects_non_positive() {
        assert!(matches!(FactorNode::new(0), Err(Error::InvalidInput(_))));
        assert!(matches!(FactorNode::new(-5), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_construction_succeeds_for_positive() {
        for v in 1..=50 {
            assert!(FactorNode::new(v).is_ok(), "construction failed for {}", v);
        }
    }

    #[test]
    fn test_known_primes_classified_prime() {
        for p in [2, 3, 5, 7, 11, 13, 17, 19, 23] {
            let node = FactorNode::new(p).unwrap();
            assert!(node.is_prime(), "{} should be prime", p);
        }
    }

    #[test]
    fn test_composites_classified_composite() {
        for c in [4, 6, 9, 12, 100] {
            let node = FactorNode::new(c).unwrap();
            assert!(!node.is_prime(), "{} should be composite", c);
        }
    }

    #[test]
    fn test_one_has_only_self_entry_and_is_prime() {
        let node = FactorNode::new(1).unwrap();
        assert_eq!(node.divisor_count(), 1);
        assert_eq!(node.quotients().count(), 0);
        assert!(node.is_prime());
    }

    #[test]
    fn test_self_marker_leads_entry_list() {
        let node = FactorNode::new(12).unwrap();
        assert!(matches!(node.raw_entries()[0], DivisorEntry::SelfMarker));
        assert!(node.raw_entries()[1..]
            .iter()
            .all(|e| matches!(e, DivisorEntry::Quotient(_))));
    }

    #[test]
    fn test_primality_without_threshold() {
        // Full-range search finds the quotient 1 at i == value.
        let two = FactorNode::with_threshold(2, false).unwrap();
        assert_eq!(two.divisor_count(), 2);
        assert!(two.is_prime());

        let six = FactorNode::with_threshold(6, false).unwrap();
        assert_eq!(six.divisor_count(), 4); // self, 3, 2, 1
        assert!(!six.is_prime());
    }

    #[test]
    fn test_perfect_square_includes_root_bound() {
        let four = FactorNode::new(4).unwrap();
        let values: Vec<i64> = four.quotients().map(|n| n.value()).collect();
        assert_eq!(values, vec![2]);
        // the quotient 2 is a leaf under the threshold: floor(sqrt(2)) = 1
        assert_eq!(four.quotients().next().unwrap().quotients().count(), 0);
    }

    #[test]
    fn test_discovery_order_is_ascending_divisor() {
        let node = FactorNode::new(36).unwrap();
        let values: Vec<i64> = node.quotients().map(|n| n.value()).collect();
        assert_eq!(values, vec![18, 12, 9, 6]);
    }

    #[test]
    fn test_threshold_propagates_to_children() {
        let node = FactorNode::with_threshold(12, false).unwrap();
        assert!(node.quotients().count() > 0);
        for child in node.quotients() {
            assert!(!child.use_threshold());
        }
    }

    #[test]
    fn test_clone_divisors_cut_bounds() {
        let node = FactorNode::new(12).unwrap();
        let cut: Vec<i64> = node.clone_divisors(true).iter().map(|n| n.value()).collect();
        assert_eq!(cut, vec![6, 4]);
        let full: Vec<i64> = node
            .clone_divisors(false)
            .iter()
            .map(|n| n.value())
            .collect();
        assert_eq!(full, vec![12, 6, 4]);
    }

    #[test]
    fn test_clone_divisors_cut_bounds_removes_unit_quotient() {
        let node = FactorNode::with_threshold(6, false).unwrap();
        // raw entries: self(6), 3, 2, 1
        let cut: Vec<i64> = node.clone_divisors(true).iter().map(|n| n.value()).collect();
        assert_eq!(cut, vec![3, 2]);
    }

    #[test]
    fn test_deep_clone_is_equal_and_independent() {
        let node = FactorNode::new(100).unwrap();
        let copy = node.deep_clone();
        assert_eq!(node, copy);
        // reconstruction, not a reference copy: distinct backing storage
        assert_ne!(node.raw_entries().as_ptr(), copy.raw_entries().as_ptr());
    }

    #[test]
    fn test_depth_limit_fails_construction() {
        let options = FactorOptions {
            use_threshold: true,
            limits: FactorLimits {
                max_depth: 2,
                max_nodes: DEFAULT_MAX_NODES,
            },
        };
        assert!(matches!(
            FactorNode::with_options(64, &options),
            Err(Error::DepthLimit(2))
        ));
    }

    #[test]
    fn test_node_limit_fails_construction() {
        let options = FactorOptions {
            use_threshold: true,
            limits: FactorLimits {
                max_depth: DEFAULT_MAX_DEPTH,
                max_nodes: 3,
            },
        };
        assert!(matches!(
            FactorNode::with_options(36, &options),
            Err(Error::NodeLimit(3))
        ));
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(2), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(35), 5);
        assert_eq!(integer_sqrt(36), 6);
        assert_eq!(integer_sqrt(i64::MAX), 3_037_000_499);
    }
}
