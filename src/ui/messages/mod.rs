//! Message rendering for the central chat panel.
//!
//! A message body is first decomposed by `segment` into prose and code
//! segments; prose goes through the markdown renderer, code through the
//! syntect highlighter with a copy action per block.

pub mod highlight;
pub mod markdown;
mod render;
pub mod segment;

// Re-export public API
pub use render::render_messages;
pub use segment::{format_inline, segment as segment_content, InlineUnit, Segment};
