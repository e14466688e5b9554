pub mod defaults;
pub mod settings;
pub mod user;

pub use defaults::default_settings;
pub use settings::{CommentSettings, LanguageConfig, ParserSettings, Settings};
pub use user::{CONFIG_FILE_NAME, load_config_file, load_user_config, user_config_path};

use crate::error::DoxyResult;
use log::info;
use std::collections::HashMap;
use std::path::Path;

/// Resolved comment layout, threaded into the template builder and renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    pub use_block: bool,
    /// Put the brief line on the block opener itself
    pub block_no_newline: bool,
    pub block_start: String,
    pub block_end: String,
    pub comment_middle: String,
    pub tag_brief: String,
    pub tag_param: String,
    pub tag_return: String,
}

impl Default for CommentStyle {
    fn default() -> Self {
        CommentStyle::from(&CommentSettings::default())
    }
}

impl From<&CommentSettings> for CommentStyle {
    fn from(settings: &CommentSettings) -> Self {
        let or_default = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };
        CommentStyle {
            use_block: settings.use_block.unwrap_or(false),
            block_no_newline: settings.block_no_newline.unwrap_or(false),
            block_start: or_default(&settings.block_start, defaults::DEFAULT_BLOCK_START),
            block_end: or_default(&settings.block_end, defaults::DEFAULT_BLOCK_END),
            comment_middle: or_default(&settings.comment_middle, defaults::DEFAULT_COMMENT_MIDDLE),
            tag_brief: or_default(&settings.tag_brief, defaults::DEFAULT_TAG_BRIEF),
            tag_param: or_default(&settings.tag_param, defaults::DEFAULT_TAG_PARAM),
            tag_return: or_default(&settings.tag_return, defaults::DEFAULT_TAG_RETURN),
        }
    }
}

impl From<&Settings> for CommentStyle {
    fn from(settings: &Settings) -> Self {
        CommentStyle::from(&settings.comment)
    }
}

/// Load every configuration layer below the command line:
/// defaults < user < project.
///
/// `project` is the project config path; a missing project file is skipped.
pub fn load_settings(project: Option<&Path>) -> DoxyResult<Settings> {
    let user = load_user_config()?;
    let project = match project {
        Some(path) => {
            let loaded = load_config_file(path)?;
            if loaded.is_some() {
                info!(target: "doxystub::config", "Using project config {}", path.display());
            }
            loaded
        }
        None => None,
    };

    Ok(merge_all(&[Some(default_settings()), user, project]).unwrap_or_default())
}

/// Merge multiple Settings in order.
/// Later configs in the slice have higher precedence (override earlier ones).
pub fn merge_all(configs: &[Option<Settings>]) -> Option<Settings> {
    configs.iter().cloned().reduce(merge_settings).flatten()
}

/// Merge two Settings, preferring values from `primary` over `fallback`
pub fn merge_settings(fallback: Option<Settings>, primary: Option<Settings>) -> Option<Settings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(Settings {
            comment: merge_comment(fallback.comment, primary.comment),
            parser: ParserSettings {
                args: primary.parser.args.or(fallback.parser.args),
            },
            languages: merge_languages(fallback.languages, primary.languages),
        }),
    }
}

fn merge_comment(fallback: CommentSettings, primary: CommentSettings) -> CommentSettings {
    CommentSettings {
        use_block: primary.use_block.or(fallback.use_block),
        block_no_newline: primary.block_no_newline.or(fallback.block_no_newline),
        block_start: primary.block_start.or(fallback.block_start),
        block_end: primary.block_end.or(fallback.block_end),
        comment_middle: primary.comment_middle.or(fallback.comment_middle),
        tag_brief: primary.tag_brief.or(fallback.tag_brief),
        tag_param: primary.tag_param.or(fallback.tag_param),
        tag_return: primary.tag_return.or(fallback.tag_return),
    }
}

fn merge_languages(
    mut fallback: HashMap<String, LanguageConfig>,
    primary: HashMap<String, LanguageConfig>,
) -> HashMap<String, LanguageConfig> {
    // Deep merge: for each language key, merge individual LanguageConfig fields
    for (key, primary_config) in primary {
        fallback
            .entry(key)
            .and_modify(|fallback_config| {
                fallback_config.library = primary_config
                    .library
                    .clone()
                    .or(fallback_config.library.take());
                fallback_config.symbol = primary_config
                    .symbol
                    .clone()
                    .or(fallback_config.symbol.take());
                fallback_config.extensions = primary_config
                    .extensions
                    .clone()
                    .or(fallback_config.extensions.take());
            })
            .or_insert(primary_config);
    }
    fallback
}
