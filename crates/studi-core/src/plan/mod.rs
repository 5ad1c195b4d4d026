//! Plan generation and rendering.

pub mod generate;
pub mod render;

pub use generate::{GenerateError, generate};
pub use render::{render_markdown, render_text};
