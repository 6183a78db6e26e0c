//! Rendering of tracks into the statements of the `Song` catalog table.

pub mod literal;
pub mod statement;

pub use literal::{escape_text, numeric_literal, text_literal, NULL};
pub use statement::{insert_statement, CREATE_SONG_TABLE};
