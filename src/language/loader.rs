use libloading::{Library, Symbol};
use log::info;
use std::collections::HashMap;
use thiserror::Error;
use tree_sitter::Language;

/// Loads Tree-sitter grammars from shared libraries.
///
/// Libraries stay loaded for the lifetime of the loader; every `Language`
/// handed out points into one of them.
#[derive(Default)]
pub struct ParserLoader {
    /// Cache of loaded libraries to prevent reloading
    loaded_libraries: HashMap<String, Library>,
}

#[derive(Debug, Error)]
pub enum ParserLoadError {
    #[error("Failed to load library: {0}")]
    LibraryLoadError(#[from] libloading::Error),
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),
}

/// Conventional constructor name exported by a grammar library
pub fn default_symbol(lang_name: &str) -> String {
    format!("tree_sitter_{}", lang_name.replace('-', "_"))
}

impl ParserLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a Tree-sitter language from a dynamic library
    ///
    /// # Arguments
    /// * `path` - Path to the dynamic library file
    /// * `func_name` - Exported constructor, e.g. `tree_sitter_objc`
    /// * `lang_name` - Name of the language (used for caching)
    pub fn load_language(
        &mut self,
        path: &str,
        func_name: &str,
        lang_name: &str,
    ) -> Result<Language, ParserLoadError> {
        if !self.loaded_libraries.contains_key(lang_name) {
            // SAFETY: loading a grammar runs no initialisers beyond the C runtime's
            let library = unsafe { Library::new(path)? };
            info!(target: "doxystub::language", "Loaded grammar library {path} for {lang_name}");
            self.loaded_libraries.insert(lang_name.to_string(), library);
        }

        let Some(library) = self.loaded_libraries.get(lang_name) else {
            return Err(ParserLoadError::SymbolNotFound(func_name.to_string()));
        };

        // SAFETY: grammar libraries export `const TSLanguage *tree_sitter_<name>(void)`
        let language_fn: Symbol<unsafe extern "C" fn() -> Language> = unsafe {
            library
                .get(func_name.as_bytes())
                .map_err(|_| ParserLoadError::SymbolNotFound(func_name.to_string()))?
        };

        Ok(unsafe { language_fn() })
    }
}
