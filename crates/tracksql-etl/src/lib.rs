//! Load and export stages for tracksql.
//!
//! Reads the `Tracks` collection of a property-list library export into typed
//! [`Track`](tracksql_core::Track) records and writes them out as a SQL script
//! that recreates the catalog in a `Song` table.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod load;

pub use config::{Config, LoggingConfig};
pub use convert::convert;
pub use error::{ExportError, ExportResult};
pub use export::{export_to_path, write_script, ExportSummary};
pub use load::{load_tracks, track_from_dictionary, tracks_from_value, DEFAULT_TRACKS_KEY};
