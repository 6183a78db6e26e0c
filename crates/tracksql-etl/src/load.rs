use chrono::{DateTime, Utc};
use plist::{Dictionary, Value};
use std::io::Cursor;
use std::path::Path;
use std::time::SystemTime;
use tracksql_core::{FieldValue, Track};

use crate::error::{ExportError, ExportResult};

/// Top-level key of the track collection in a library export.
pub const DEFAULT_TRACKS_KEY: &str = "Tracks";

const NAME: &str = "Name";
const ARTIST: &str = "Artist";
const ALBUM: &str = "Album";
const TOTAL_TIME: &str = "Total Time";
const BPM: &str = "BPM";

/// Read a property-list document and return its tracks in document order.
///
/// XML and binary property lists are both accepted. The whole document is
/// read into memory first; nothing is returned unless every step succeeds.
pub fn load_tracks(path: impl AsRef<Path>, tracks_key: &str) -> ExportResult<Vec<Track>> {
    let path = path.as_ref();
    log::info!("Loading tracks from {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = Value::from_reader(Cursor::new(bytes)).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tracks = tracks_from_value(&document, tracks_key)?;
    log::info!("Loaded {} tracks", tracks.len());
    Ok(tracks)
}

/// Extract the tracks from an already parsed document.
pub fn tracks_from_value(document: &Value, tracks_key: &str) -> ExportResult<Vec<Track>> {
    let root = document
        .as_dictionary()
        .ok_or_else(|| ExportError::NotADictionary {
            what: String::from("document root"),
        })?;

    let collection = root
        .get(tracks_key)
        .ok_or_else(|| ExportError::MissingTracks {
            key: tracks_key.to_owned(),
        })?
        .as_dictionary()
        .ok_or_else(|| ExportError::NotADictionary {
            what: format!("'{tracks_key}'"),
        })?;

    collection
        .iter()
        .map(|(id, entry)| {
            entry
                .as_dictionary()
                .map(|attributes| track_from_dictionary(id, attributes))
                .ok_or_else(|| ExportError::InvalidRecord { id: id.clone() })
        })
        .collect()
}

/// Build a track from one entry of the collection.
pub fn track_from_dictionary(id: &str, attributes: &Dictionary) -> Track {
    log::debug!("Reading track {}", id);

    Track {
        id: id.to_owned(),
        title: text_attribute(id, attributes, NAME),
        artist: text_attribute(id, attributes, ARTIST),
        album: text_attribute(id, attributes, ALBUM),
        total_time: scalar_attribute(id, attributes, TOTAL_TIME),
        bpm: scalar_attribute(id, attributes, BPM),
    }
}

fn text_attribute(id: &str, attributes: &Dictionary, key: &str) -> Option<String> {
    scalar_attribute(id, attributes, key).map(|value| match value {
        FieldValue::Text(text) => text,
        other => other.to_string(),
    })
}

fn scalar_attribute(id: &str, attributes: &Dictionary, key: &str) -> Option<FieldValue> {
    let value = attributes.get(key)?;
    let scalar = to_field_value(value);
    if scalar.is_none() {
        log::warn!("Track {}: ignoring non-scalar '{}' attribute", id, key);
    }
    scalar
}

fn to_field_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::String(text) => Some(FieldValue::Text(text.clone())),
        Value::Integer(integer) => integer
            .as_signed()
            .map(i128::from)
            .or_else(|| integer.as_unsigned().map(i128::from))
            .map(FieldValue::Integer),
        Value::Real(real) => Some(FieldValue::Real(*real)),
        Value::Boolean(flag) => Some(FieldValue::Boolean(*flag)),
        Value::Date(date) => Some(FieldValue::Date(DateTime::<Utc>::from(SystemTime::from(
            *date,
        )))),
        _ => None,
    }
}
