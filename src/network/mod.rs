mod collect;
mod compound;
mod error;
mod glyph;
mod graph;
mod parse;
mod source;

pub use collect::load_network;
pub use compound::{Ancestors, CompoundGraph};
pub use error::SnapshotError;
pub use glyph::GlyphClass;
pub use graph::{EdgeRecord, NetworkSnapshot, NodeRecord};
pub use parse::parse_snapshot;
pub use source::{SourceVisibility, UNKNOWN_SOURCE, parse_data_source, source_of};
