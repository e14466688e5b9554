use super::filetypes::normalize_language;
use super::registry::LanguageRegistry;
use crate::error::{DoxyError, DoxyResult};
use crate::syntax::{SyntaxTree, lower_tree};
use crate::text::SourceText;
use log::debug;
use tree_sitter::Parser;

/// Produces a lowered syntax tree for one buffer.
///
/// One call is one parse session: the returned tree is owned by the caller
/// and nothing is cached between calls.
pub trait SourceParser {
    fn parse(
        &mut self,
        text: &SourceText,
        filename: &str,
        extra_args: &[String],
    ) -> DoxyResult<SyntaxTree>;
}

/// [`SourceParser`] backed by the grammars of a [`LanguageRegistry`]
pub struct TreeSitterParser {
    registry: LanguageRegistry,
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            parser: Parser::new(),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    fn select_language(&self, filename: &str, extra_args: &[String]) -> String {
        let (language, rest) = split_language_flag(extra_args);
        if !rest.is_empty() {
            debug!(target: "doxystub::parser", "Ignoring parser args: {}", rest.join(" "));
        }
        language.unwrap_or_else(|| self.registry.language_for_path(filename).to_string())
    }
}

impl SourceParser for TreeSitterParser {
    fn parse(
        &mut self,
        text: &SourceText,
        filename: &str,
        extra_args: &[String],
    ) -> DoxyResult<SyntaxTree> {
        let language_id = self.select_language(filename, extra_args);
        let language = self.registry.get(&language_id).ok_or_else(|| {
            DoxyError::parser_unavailable(&language_id, "language is not registered")
        })?;
        self.parser
            .set_language(language)
            .map_err(|e| DoxyError::parser_unavailable(&language_id, e.to_string()))?;

        let source = text.joined();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| DoxyError::Parse {
                filename: filename.to_string(),
            })?;
        debug!(
            target: "doxystub::parser",
            "Parsed {filename} as {language_id} (errors: {})",
            tree.root_node().has_error()
        );

        Ok(lower_tree(&tree, &source, text))
    }
}

/// Extract `-x <lang>` / `-x<lang>` from parser args.
///
/// Returns the normalized language, if any, and the remaining args.
pub fn split_language_flag(args: &[String]) -> (Option<String>, Vec<&str>) {
    let mut language = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-x" {
            if let Some(value) = iter.next() {
                language = Some(normalize_language(value));
            }
        } else if let Some(value) = arg.strip_prefix("-x")
            && !value.is_empty()
        {
            language = Some(normalize_language(value));
        } else {
            rest.push(arg.as_str());
        }
    }
    (language, rest)
}
