//! Default configuration values.
//!
//! These are the bottom configuration layer and the content printed by
//! `config init`.

use super::settings::{CommentSettings, ParserSettings, Settings};
use std::collections::HashMap;

pub const DEFAULT_COMMENT_MIDDLE: &str = "/// ";
pub const DEFAULT_BLOCK_START: &str = "/**";
pub const DEFAULT_BLOCK_END: &str = " */";
pub const DEFAULT_TAG_BRIEF: &str = "\\brief ";
pub const DEFAULT_TAG_PARAM: &str = "\\param ";
pub const DEFAULT_TAG_RETURN: &str = "\\return ";

/// Returns fully populated settings: line comments with Doxygen backslash tags.
pub fn default_settings() -> Settings {
    Settings {
        comment: CommentSettings {
            use_block: Some(false),
            block_no_newline: Some(false),
            block_start: Some(DEFAULT_BLOCK_START.to_string()),
            block_end: Some(DEFAULT_BLOCK_END.to_string()),
            comment_middle: Some(DEFAULT_COMMENT_MIDDLE.to_string()),
            tag_brief: Some(DEFAULT_TAG_BRIEF.to_string()),
            tag_param: Some(DEFAULT_TAG_PARAM.to_string()),
            tag_return: Some(DEFAULT_TAG_RETURN.to_string()),
        },
        parser: ParserSettings { args: None },
        languages: HashMap::new(),
    }
}
