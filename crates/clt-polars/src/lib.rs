//! Polars integration for CLT-based confidence intervals
//!
//! Loads delimited files into DataFrames and exposes the interval formulas
//! of `clt-confidence` through a single extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use clt_polars::{read_csv, CltIntervalsExt, ProportionMethod};
//!
//! let df = read_csv("hrsrelax,getahead\n3,Hard work\nNA,Both equally\n5,Hard work\n2,Luck or help\n")?;
//!
//! let hours = df.mean_interval("hrsrelax", 0.95)?;
//! let outlook = df.proportion_interval("getahead", "Hard work", 0.90, ProportionMethod::Wald)?;
//! ```

mod config;
mod error;
mod io;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use io::{load_csv, read_csv, NULL_TOKENS};
pub use traits::*;
