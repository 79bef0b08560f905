pub mod chart;
pub mod document;
pub mod generation;
pub mod layout;
pub mod theme;
