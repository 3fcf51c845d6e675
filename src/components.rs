//! Reusable HTML components
//!
//! Maud component functions for the markup the renderer splices into
//! converted Govspeak, and for the standalone preview page.

pub mod layout;
pub mod state_link;
