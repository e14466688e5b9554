use super::segment::{CommentTemplate, TabStops, TemplateLine};
use crate::config::CommentStyle;
use crate::error::{DoxyError, DoxyResult};
use crate::syntax::{DeclarationClass, NodeId, NodeKind, SyntaxNode, SyntaxTree};
use crate::text::{RangeEnd, SourceText, next_position, previous_position};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

/// Builds comment templates for resolved declarations.
pub struct TemplateBuilder<'a> {
    tree: &'a SyntaxTree,
    text: &'a SourceText,
    style: &'a CommentStyle,
}

impl<'a> TemplateBuilder<'a> {
    pub fn new(tree: &'a SyntaxTree, text: &'a SourceText, style: &'a CommentStyle) -> Self {
        Self { tree, text, style }
    }

    pub fn build(&self, id: NodeId, class: DeclarationClass) -> DoxyResult<CommentTemplate> {
        match class {
            DeclarationClass::FunctionLike => Ok(self.function_like(id)),
            DeclarationClass::FunctionTemplate => self.function_template(id),
            DeclarationClass::ClassLike => Ok(self.class_like(id)),
        }
    }

    /// Brief, blank, final stop.
    pub fn class_like(&self, id: NodeId) -> CommentTemplate {
        let node = self.tree.node(id);
        let mut stops = TabStops::default();
        self.finish(node, self.brief_block(node, &mut stops))
    }

    /// Brief block, parameters, and a return line unless the result is void.
    pub fn function_like(&self, id: NodeId) -> CommentTemplate {
        let node = self.tree.node(id);
        let mut stops = TabStops::default();
        let mut lines = self.brief_block(node, &mut stops);
        lines.extend(self.param_block(id, &mut stops));

        if let Some(result) = node.result_type().filter(|result| !result.is_void()) {
            lines.push(TemplateLine::blank());
            lines.push(self.return_line(result.as_str(), &mut stops));
        }
        self.finish(node, lines)
    }

    /// Like [`Self::function_like`], but the return type is read from the
    /// buffer text between the template parameter list and the name.
    ///
    /// The text is only checked for the substring `void` once block comments
    /// are stripped, so `Void` or `void_t` in the return type is misread.
    pub fn function_template(&self, id: NodeId) -> DoxyResult<CommentTemplate> {
        let node = self.tree.node(id);
        let anchor = self
            .tree
            .children_of_kind(id, NodeKind::TemplateTypeParameter)
            .next()
            .ok_or_else(|| {
                DoxyError::missing_template_anchor(node.spelling(), node.extent().start.line)
            })?;
        let scanned = self.scan_template_result(self.tree.node(anchor), node);
        debug!(target: "doxystub::template", "Template result text: {scanned:?}");

        let mut stops = TabStops::default();
        let mut lines = self.brief_block(node, &mut stops);
        lines.extend(self.param_block(id, &mut stops));

        if !scanned.contains("void") {
            let default = node
                .result_type()
                .map(|result| result.as_str().to_string())
                .unwrap_or_else(|| scanned.split_whitespace().collect::<Vec<_>>().join(" "));
            lines.push(TemplateLine::blank());
            lines.push(self.return_line(&default, &mut stops));
        }
        Ok(self.finish(node, lines))
    }

    /// Buffer text after the anchor parameter and before the name, without block comments
    fn scan_template_result(&self, anchor: &SyntaxNode, node: &SyntaxNode) -> String {
        let start = next_position(self.text, anchor.extent().end);
        let end = previous_position(self.text, node.location());
        let lines = match (start, end) {
            (Some(start), Some(end)) => self
                .text
                .slice_range(start, end, RangeEnd::Inclusive)
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        BLOCK_COMMENT.replace_all(&lines.join("\n"), "").into_owned()
    }

    fn brief_block(&self, node: &SyntaxNode, stops: &mut TabStops) -> Vec<TemplateLine> {
        vec![
            TemplateLine::text(&self.style.tag_brief).with_field(stops.next_field(node.spelling())),
            TemplateLine::blank(),
            TemplateLine::blank().with_field(TabStops::final_field()),
        ]
    }

    fn param_block(&self, id: NodeId, stops: &mut TabStops) -> Vec<TemplateLine> {
        let params: Vec<TemplateLine> = self
            .tree
            .children_of_kind(id, NodeKind::Parameter)
            .map(|param| {
                let name = self.tree.node(param).spelling();
                TemplateLine::text(format!("{}{name} ", self.style.tag_param))
                    .with_field(stops.next_field(name))
            })
            .collect();

        if params.is_empty() {
            return params;
        }
        std::iter::once(TemplateLine::blank()).chain(params).collect()
    }

    fn return_line(&self, default: &str, stops: &mut TabStops) -> TemplateLine {
        TemplateLine::text(&self.style.tag_return).with_field(stops.next_field(default))
    }

    fn finish(&self, node: &SyntaxNode, lines: Vec<TemplateLine>) -> CommentTemplate {
        let start = node.extent().start;
        CommentTemplate {
            insertion_line: start.line,
            indent: self.text.measure_indent(start.line, start.column),
            lines,
        }
    }
}
