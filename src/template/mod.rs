//! Comment templates: building them from declarations and rendering them.

mod builder;
mod render;
mod segment;

pub use builder::TemplateBuilder;
pub use render::{CommentRenderer, OutputFormat};
pub use segment::{CommentTemplate, Segment, TabStops, TemplateLine};
