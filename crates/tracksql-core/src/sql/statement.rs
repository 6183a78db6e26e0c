use crate::model::Track;
use crate::sql::literal::{numeric_literal, text_literal};

/// Schema statement emitted once, ahead of every insert.
pub const CREATE_SONG_TABLE: &str = "CREATE TABLE IF NOT EXISTS Song (\
id INT AUTO_INCREMENT PRIMARY KEY, \
title VARCHAR(255), \
artist VARCHAR(255), \
album VARCHAR(255), \
total_time INT, \
bpm INT\
);";

/// Render the insert statement for one track, without a trailing newline.
#[must_use]
pub fn insert_statement(track: &Track) -> String {
    format!(
        "INSERT INTO Song (title, artist, album, total_time, bpm) VALUES ({}, {}, {}, {}, {});",
        text_literal(track.title.as_deref()),
        text_literal(track.artist.as_deref()),
        text_literal(track.album.as_deref()),
        numeric_literal(track.total_time.as_ref()),
        numeric_literal(track.bpm.as_ref()),
    )
}
