//! Textual rendering of factorization trees
//!
//! The line formats here are a compatibility surface: downstream consumers
//! diff this text, so every byte (brackets, semicolons, two-space indents) is
//! fixed. Rendering is purely derived from an already-built tree and depends
//! only on `(value, use_threshold)`; rendering the same node twice yields
//! identical text.

use crate::factor::FactorNode;
use std::fmt;

impl FactorNode {
    /// Render the full tree rooted at this node.
    ///
    /// Opens with `<value> number factored:`; a prime root renders a single
    /// statement line instead of descending into the (empty) tree body.
    ///
    /// # Examples
    ///
    /// ```
    /// use factree_core::FactorNode;
    ///
    /// let seven = FactorNode::new(7).unwrap();
    /// assert_eq!(seven.render_tree(), "7 number factored:\n  7 is a Prime Number.\n");
    /// ```
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} number factored:\n", self.value()));
        if self.is_prime() {
            out.push_str(&format!("  {} is a Prime Number.\n", self.value()));
        } else {
            out.push_str(&self.render_subtree(1));
        }
        out
    }

    /// Render the divisor lines below this node at the given indent level.
    ///
    /// Each quotient entry emits `<value>/<divisor>=<quotient>;` behind two
    /// spaces per indent level, followed by the entry's own subtree one level
    /// deeper. The self marker is skipped.
    pub fn render_subtree(&self, indent: usize) -> String {
        let mut out = String::new();
        for divisor in self.quotients() {
            for _ in 0..indent {
                out.push_str("  ");
            }
            out.push_str(&format!(
                "{}/{}={};\n",
                self.value(),
                divisor.value(),
                self.value() / divisor.value()
            ));
            out.push_str(&divisor.render_subtree(indent + 1));
        }
        out
    }

    /// Divisor count and list lines over a freshly cloned divisor list.
    pub fn divisors_state(&self, cut_bounds: bool) -> String {
        let local = self.clone_divisors(cut_bounds);
        format!(
            "  Divisors amount: {};\n  Divisors List: {}",
            local.len(),
            format_divisor_list(&local)
        )
    }

    /// Labeled multi-line state block: flags, divisor count, divisor list.
    ///
    /// `cut_bounds` selects the clone policy the count and list reflect.
    pub fn general_state(&self, cut_bounds: bool) -> String {
        format!(
            "General state:\n  Use Threshold: {};\n  Cut Bounds: {};\n{}",
            self.use_threshold(),
            cut_bounds,
            self.divisors_state(cut_bounds)
        )
    }
}

/// Bracketed divisor list: `[ 12, 6, 4 ];` plus newline, `[ ];` when empty.
pub fn format_divisor_list(divisors: &[FactorNode]) -> String {
    let mut out = String::from("[");
    for (i, node) in divisors.iter().enumerate() {
        out.push(' ');
        out.push_str(&node.value().to_string());
        if i < divisors.len() - 1 {
            out.push(',');
        }
    }
    out.push_str(" ];\n");
    out
}

impl fmt::Display for FactorNode {
    /// Full tree rendering, identical to [`FactorNode::render_tree`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_tree())
    }
}
