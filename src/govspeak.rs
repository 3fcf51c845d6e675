//! Govspeak rendering with internal link resolution.
//!
//! Govspeak is converted to HTML with comrak, parsed into a mutable tree
//! with kuchikiki, and every anchor pointing back at the admin interface is
//! resolved against the content store and rewritten according to the
//! editorial state of its target.

mod converter;
mod links;
mod renderer;
pub mod urls;

pub use converter::{CONTAINER_CLASS, Converter, Header};
pub use links::{LinkResolver, LinkTarget};
pub use renderer::GovspeakRenderer;
