use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Comment layout options as written in `doxystub.toml`.
///
/// Every field is optional so partial files can be layered over each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_block: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_no_newline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_brief: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_return: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserSettings {
    /// Extra arguments handed to the parser, e.g. `["-x", "objc"]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

/// A grammar loaded from a shared library
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    /// Exported constructor; defaults to `tree_sitter_<language>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub comment: CommentSettings,
    #[serde(default)]
    pub parser: ParserSettings,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub languages: HashMap<String, LanguageConfig>,
}
