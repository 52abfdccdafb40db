//! Core types for CLT-based inference
//!
//! This crate holds what every other clt-stats crate shares: the error type,
//! the [`Estimator`] trait, and the sample summaries that interval formulas
//! consume.
//!
//! # Example
//!
//! ```rust
//! use clt_core::{ProportionSummary, SampleSummary};
//!
//! let hours = vec![Some(3.0), None, Some(4.5), Some(2.0), Some(5.0)];
//! let summary = SampleSummary::from_observations(hours).unwrap();
//! assert_eq!(summary.n, 4);
//!
//! let outlook = ProportionSummary::new(42, 100).unwrap();
//! assert_eq!(outlook.p_hat(), 0.42);
//! ```

pub mod error;
pub mod summary;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use summary::{ProportionSummary, SampleSummary};
pub use traits::Estimator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Error, Estimator, ProportionSummary, Result, SampleSummary};
}
