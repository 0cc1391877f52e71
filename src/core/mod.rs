//! Core Module - portfolio content and background math

pub mod bezier;
pub mod catalog;

pub use bezier::*;
pub use catalog::*;
