//! One-shot comment generation: parse, resolve, build, render.

use crate::analysis::DeclarationResolver;
use crate::config::{CommentStyle, Settings};
use crate::error::{DoxyError, DoxyResult};
use crate::language::{LanguageRegistry, SourceParser, TreeSitterParser};
use crate::template::{CommentRenderer, CommentTemplate, OutputFormat, TemplateBuilder};
use crate::text::{Position, SourceText};
use log::{debug, info};
use serde::Serialize;

/// A rendered comment and where it goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    /// 1-based line the comment is inserted above
    pub line: usize,
    #[serde(skip)]
    pub template: CommentTemplate,
    pub lines: Vec<String>,
}

impl Insertion {
    /// Insert the comment lines above `self.line`
    pub fn apply(&self, buffer: &mut Vec<String>) {
        let at = self.line.saturating_sub(1).min(buffer.len());
        buffer.splice(at..at, self.lines.iter().cloned());
    }
}

/// Generates documentation comments for declarations in a buffer.
///
/// Each call to [`DocGenerator::generate`] is an independent parse session.
pub struct DocGenerator<P: SourceParser = TreeSitterParser> {
    parser: P,
    style: CommentStyle,
    parser_args: Vec<String>,
}

impl DocGenerator<TreeSitterParser> {
    /// Load the configured grammars; fails if any of them is unavailable.
    pub fn new(settings: &Settings) -> DoxyResult<Self> {
        let registry = LanguageRegistry::from_settings(settings)?;
        Ok(Self::with_parser(TreeSitterParser::new(registry), settings))
    }
}

impl<P: SourceParser> DocGenerator<P> {
    pub fn with_parser(parser: P, settings: &Settings) -> Self {
        Self {
            parser,
            style: CommentStyle::from(settings),
            parser_args: settings.parser.args.clone().unwrap_or_default(),
        }
    }

    pub fn style(&self) -> &CommentStyle {
        &self.style
    }

    /// Append parser arguments after the configured ones
    pub fn extend_parser_args(&mut self, args: impl IntoIterator<Item = String>) {
        self.parser_args.extend(args);
    }

    /// Build the comment for the declaration at `pos` in `text`.
    pub fn generate(
        &mut self,
        text: &SourceText,
        filename: &str,
        pos: Position,
        format: OutputFormat,
    ) -> DoxyResult<Insertion> {
        let tree = self.parser.parse(text, filename, &self.parser_args)?;
        debug!(target: "doxystub::generate", "{filename}: {} syntax nodes", tree.len());

        let (id, class) = DeclarationResolver::new(&tree, text)
            .resolve(pos)
            .ok_or_else(|| DoxyError::no_declaration(filename, pos.line, pos.column))?;
        let node = tree.node(id);
        info!(
            target: "doxystub::generate",
            "Documenting {} '{}' at {}",
            node.kind().as_str(),
            node.spelling(),
            node.extent().start
        );

        let template = TemplateBuilder::new(&tree, text, &self.style).build(id, class)?;
        let lines = CommentRenderer::new(&self.style).render(&template, format);
        Ok(Insertion {
            line: template.insertion_line,
            template,
            lines,
        })
    }
}
