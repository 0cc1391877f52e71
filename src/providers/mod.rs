//! Providers Module - External Data Sources
//!
//! The page's view of the portfolio API.

pub mod portfolio;

pub use portfolio::*;
