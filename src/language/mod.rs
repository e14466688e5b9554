pub mod filetypes;
pub mod loader;
pub mod parser;
pub mod registry;

// Re-export key types
pub use filetypes::{BUNDLED_LANGUAGE, FiletypeResolver, normalize_language};
pub use loader::{ParserLoadError, ParserLoader};
pub use parser::{SourceParser, TreeSitterParser, split_language_flag};
pub use registry::LanguageRegistry;
