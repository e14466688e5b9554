pub mod analysis;
pub mod config;
pub mod error;
pub mod generate;
pub mod language;
pub mod syntax;
pub mod template;
pub mod text;

// Re-export the main entry points
pub use config::{CommentStyle, Settings};
pub use error::{DoxyError, DoxyResult};
pub use generate::{DocGenerator, Insertion};
pub use template::OutputFormat;
pub use text::{Position, SourceText};
