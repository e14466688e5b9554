use super::filetypes::{BUNDLED_LANGUAGE, FiletypeResolver, normalize_language};
use super::loader::{ParserLoader, default_symbol};
use crate::config::Settings;
use crate::error::{DoxyError, DoxyResult};
use log::{debug, info, warn};
use std::collections::HashMap;
use tree_sitter::Language;

/// Registry of the grammars available to one generator session.
///
/// Built once at startup; a configured grammar that fails to load makes
/// construction fail instead of surfacing on every invocation.
pub struct LanguageRegistry {
    // Declared before `loader` so languages drop before their libraries
    languages: HashMap<String, Language>,
    filetypes: FiletypeResolver,
    loader: ParserLoader,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

impl LanguageRegistry {
    /// Registry holding only the bundled C/C++ grammar
    pub fn bundled() -> Self {
        let mut languages = HashMap::new();
        languages.insert(
            BUNDLED_LANGUAGE.to_string(),
            Language::from(tree_sitter_cpp::LANGUAGE),
        );
        Self {
            languages,
            filetypes: FiletypeResolver::new(),
            loader: ParserLoader::new(),
        }
    }

    /// Bundled grammar plus every `[languages.<name>]` entry of `settings`
    pub fn from_settings(settings: &Settings) -> DoxyResult<Self> {
        let mut registry = Self::bundled();

        let mut names: Vec<&String> = settings.languages.keys().collect();
        names.sort();
        for name in names {
            let config = &settings.languages[name];
            let language_id = normalize_language(name);

            if let Some(library) = &config.library {
                let symbol = config
                    .symbol
                    .clone()
                    .unwrap_or_else(|| default_symbol(&language_id));
                let language = registry
                    .loader
                    .load_language(library, &symbol, &language_id)
                    .map_err(|e| DoxyError::parser_unavailable(&language_id, e.to_string()))?;
                registry.register(language_id.clone(), language);
            } else if !registry.contains(&language_id) {
                return Err(DoxyError::parser_unavailable(
                    &language_id,
                    "no library configured",
                ));
            }

            for extension in config.extensions.iter().flatten() {
                let extension = extension.trim().trim_start_matches('.');
                if extension.is_empty() {
                    warn!(
                        target: "doxystub::language",
                        "Ignoring empty extension configured for {language_id}"
                    );
                    continue;
                }
                debug!(target: "doxystub::language", "Mapping .{extension} to {language_id}");
                if let Some(previous) = registry.filetypes.add_mapping(extension, &language_id)
                    && previous != language_id
                {
                    warn!(
                        target: "doxystub::language",
                        ".{extension} was mapped to {previous}, now {language_id}"
                    );
                }
            }
        }

        info!(
            target: "doxystub::language",
            "Languages available: {}",
            registry.language_ids().join(", ")
        );
        Ok(registry)
    }

    /// Register a language with the given ID
    pub fn register(&mut self, language_id: String, language: Language) {
        self.languages.insert(language_id, language);
    }

    pub fn get(&self, language_id: &str) -> Option<&Language> {
        self.languages.get(language_id)
    }

    pub fn contains(&self, language_id: &str) -> bool {
        self.languages.contains_key(language_id)
    }

    /// All registered language IDs, sorted
    pub fn language_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.languages.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Language for a file path by extension
    pub fn language_for_path(&self, path: &str) -> &str {
        self.filetypes.language_for_path(path)
    }
}
