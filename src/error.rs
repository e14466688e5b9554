//! Error handling types for doxystub
//!
//! Every failure is terminal for the current invocation: callers receive one
//! of these values instead of a partially built comment, and the buffer is
//! never touched.

use thiserror::Error;

/// Comprehensive error type for comment generation
#[derive(Debug, Error)]
pub enum DoxyError {
    /// The walk exhausted the tree without reaching a documentable declaration
    #[error("No supported declaration found at {filename}:{line},{column}")]
    NoDeclarationFound {
        filename: String,
        line: usize,
        column: usize,
    },

    /// A function template has no template type parameter to anchor the return type scan
    #[error("Unable to find a template type parameter for '{name}' (line {line})")]
    MissingTemplateAnchor { name: String, line: usize },

    /// No grammar could be loaded for the language
    #[error("Parser unavailable for language '{language}': {reason}")]
    ParserUnavailable { language: String, reason: String },

    /// The parser did not produce a tree
    #[error("Failed to parse {filename}")]
    Parse { filename: String },

    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for comment generation
pub type DoxyResult<T> = Result<T, DoxyError>;

/// Helper functions for common error patterns
impl DoxyError {
    /// Create a no-declaration error for the given buffer position
    pub fn no_declaration(filename: impl Into<String>, line: usize, column: usize) -> Self {
        DoxyError::NoDeclarationFound {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// Create a missing template anchor error
    pub fn missing_template_anchor(name: impl Into<String>, line: usize) -> Self {
        DoxyError::MissingTemplateAnchor {
            name: name.into(),
            line,
        }
    }

    /// Create a parser unavailable error
    pub fn parser_unavailable(language: impl Into<String>, reason: impl Into<String>) -> Self {
        DoxyError::ParserUnavailable {
            language: language.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        DoxyError::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_declaration_message_names_file_and_position() {
        let err = DoxyError::no_declaration("widget.cpp", 3, 7);
        assert_eq!(
            err.to_string(),
            "No supported declaration found at widget.cpp:3,7"
        );
    }

    #[test]
    fn test_parser_unavailable_message() {
        let err = DoxyError::parser_unavailable("objc", "Symbol not found: tree_sitter_objc");
        assert_eq!(
            err.to_string(),
            "Parser unavailable for language 'objc': Symbol not found: tree_sitter_objc"
        );
    }
}
