//! Core record model for guitar-registry.
//!
//! This crate defines the validated [`Guitar`] record, the [`GuitarSpec`]
//! construction input, and the [`Registry`] that mints guitars, assigns
//! their ids, and tracks how many of them are alive.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod registry;

pub use error::{Error, Result};
pub use model::{Guitar, GuitarId, GuitarSpec};
pub use registry::Registry;
