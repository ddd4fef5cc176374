//! # mrzkit
//!
//! Machine Readable Zone generation for ICAO Document 9303 travel
//! documents: TD3 passports (2 × 44) and TD1 identity cards (3 × 30).
//!
//! Raw fields are normalized into the MRZ alphabet `[A-Z0-9<]`, laid out
//! into fixed-width lines and protected with 7-3-1 check digits. The
//! pipeline is a pure function of its input: no I/O, no shared state.
//!
//! ## Quick Start
//!
//! ```rust
//! use mrzkit::*;
//!
//! let fields = DocumentFields {
//!     last_name: "Hulton".into(),
//!     first_name: "David Nakamura".into(),
//!     ..Default::default()
//! };
//! let mrz = generate_mrz(&fields).unwrap();
//!
//! assert_eq!(mrz.lines[0], "P<USAHULTON<<DAVID<NAKAMURA<<<<<<<<<<<<<<<<<");
//! assert_eq!(mrz.final_check_digit, '0');
//! assert!(verify_output(&mrz).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Check digits, normalization, TD3/TD1 composition, validation, verification |
//! | `batch` | JSON batch conversion with per-record errors |
//! | `cli` | The `mrz` command-line tool |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "batch")]
pub mod batch;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
