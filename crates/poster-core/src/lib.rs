//! poster-core
//!
//! Pure domain types: the authored poster document, themes, layout ids,
//! and the positioned visual tree handed to previews and exporters.
//! No I/O and no AWS SDK dependency.

pub mod color;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod visual;
