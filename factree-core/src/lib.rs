//! # Factree Core Library
//!
//! Factorization trees: recursive decomposition of a positive integer into
//! its divisors, with derived queries and text rendering. Includes:
//! - Tree construction and divisor discovery (`factor`)
//! - Prime/composite classification from the discovered divisor structure
//! - Deep-copy divisor cloning with optional bound cutting
//! - Text rendering of trees, divisor lists, and state reports (`render`)
//! - Serializable result reports (`report`)
//! - Configuration loading (`config`)
//!
//! # Examples
//!
//! ```
//! use factree_core::FactorNode;
//!
//! let node = FactorNode::new(12).unwrap();
//! assert!(!node.is_prime());
//! assert_eq!(node.render_tree(), "12 number factored:\n  12/6=2;\n    6/3=2;\n  12/4=3;\n    4/2=2;\n");
//! ```

pub mod config;
pub mod error;
pub mod factor;
pub mod render;
pub mod report;

pub use error::{Error, Result};
pub use factor::{DivisorEntry, FactorLimits, FactorNode, FactorOptions};
pub use render::format_divisor_list;
pub use report::FactorReport;
