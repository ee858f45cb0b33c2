//! Growable - a generic array with checked indexing and doubling growth.
//!
//! # Quick Start
//!
//! ```
//! use growable::{Error, GrowableArray};
//!
//! let mut numbers = GrowableArray::new();
//! for n in [3, 1, 2] {
//!     numbers.push(n);
//! }
//!
//! numbers.sort();
//! assert_eq!(numbers.get(0), Ok(&1));
//! assert_eq!(numbers.remove(2), Ok(3));
//! assert_eq!(numbers.get(2), Err(Error::OutOfRange { index: 2, len: 2 }));
//! ```

pub mod array;
pub mod config;
pub mod error;
pub mod profiling;

pub use array::GrowableArray;
pub use config::Config;
pub use error::{Error, Result};
