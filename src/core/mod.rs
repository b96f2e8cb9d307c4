//! Core error types shared by every module of the crate

pub mod error;
pub mod error_code;

pub use error::*;
