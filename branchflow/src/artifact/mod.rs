//! The append-only workflow artifact.
//!
//! An artifact is a UTF-8 text file that is created once with a header and
//! afterwards only ever appended to. Every append opens the file, writes one
//! block and closes it again.

mod render;
mod store;

pub use render::BlockRenderer;
pub use store::{ArtifactStore, FileArtifactStore};
