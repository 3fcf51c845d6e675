//! Govspeak renderer with internal admin link resolution.

pub mod components;
mod config;
mod context;
pub mod govspeak;
mod model;
mod store;

pub use config::Config;
pub use context::LinkContext;
pub use govspeak::{Converter, GovspeakRenderer, Header, LinkResolver, LinkTarget};
pub use model::{Document, DocumentKind, Edition, EditionState, RecordId, SupportingPage};
pub use store::{ContentStore, MemoryStore};
