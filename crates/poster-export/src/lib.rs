//! poster-export
//!
//! Turns a rendered poster into export artifacts: an SVG serialization of
//! the visual tree for the PDF rasterizer, and a simplified slide plan for
//! the deck builder. The binary encoders sit behind the [`raster::Rasterizer`]
//! and [`deck::DeckBuilder`] traits.

pub mod deck;
pub mod error;
pub mod measure;
pub mod page;
pub mod raster;
pub mod resolve;
pub mod svg;
