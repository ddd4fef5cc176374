//! Core MRZ types, check digits, normalization and line composition.
//!
//! This module covers the ICAO 9303 TD3 (passport) and TD1 (identity
//! card) layouts, with opt-in strict validation and re-verification of
//! existing blocks.

mod builder;
mod check_digit;
mod compose;
pub mod countries;
mod error;
mod normalize;
mod types;
mod validation;
mod verify;

pub use builder::*;
pub use check_digit::*;
pub use compose::*;
pub use countries::is_known_country_code;
pub use error::*;
pub use normalize::*;
pub use types::*;
pub use validation::*;
pub use verify::*;
