pub mod resolver;

// Re-export main types
pub use resolver::DeclarationResolver;
