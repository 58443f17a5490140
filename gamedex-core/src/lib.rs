//! Video game catalog model and query engine.
//!
//! Load records into a [`Catalog`] once, then answer questions about it
//! with the read-only functions in [`queries`]. The catalog is owned by the
//! caller; queries borrow it and never mutate it, so a loaded catalog can be
//! shared freely across threads.

pub mod catalog;
pub mod genre;
pub mod queries;
pub mod types;

pub use catalog::Catalog;
pub use genre::{Genre, GenreParseError};
pub use queries::*;
pub use types::{Nomination, Tally, VideoGame, eq_ignore_case};
