//! Common numeric kinds, configuration and error handling for qlnum.

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod kind;

pub use config::{DEFAULT_SCALE, NumericConfig, ROUNDING_MODE};
pub use error::{Error, Result};
pub use kind::NumericKind;
