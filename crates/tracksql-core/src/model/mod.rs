pub mod track;
pub mod value;

pub use track::Track;
pub use value::FieldValue;
