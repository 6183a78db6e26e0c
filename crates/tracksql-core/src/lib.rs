//! Core track model for tracksql.
//!
//! This crate defines the typed track record extracted from a playlist
//! library export and the rendering of those records into the statements of
//! the `Song` catalog table.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod model;
pub mod sql;

pub use model::{FieldValue, Track};
