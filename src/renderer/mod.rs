//! Presentation layer
//!
//! Produces renderer-agnostic draw commands; no pixels are touched here.

pub mod draw;
pub mod text;

pub use draw::{DrawCommand, Hud, score_screen, title_screen};
pub use text::{FontSource, TextAnchor, TextStyle, score_text};
