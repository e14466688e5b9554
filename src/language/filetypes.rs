use std::collections::HashMap;
use std::path::Path;

/// Language bundled with the binary and used when nothing else matches
pub const BUNDLED_LANGUAGE: &str = "cpp";

const BUNDLED_EXTENSIONS: &[&str] = &[
    "c", "h", "cc", "cpp", "cxx", "c++", "hpp", "hh", "hxx", "h++", "ipp", "tpp", "inl",
];

/// Canonical registry name for a `-x` language spelling
pub fn normalize_language(name: &str) -> String {
    match name.to_ascii_lowercase().as_str() {
        "c" | "c++" | "cxx" | "c-header" | "c++-header" => BUNDLED_LANGUAGE.to_string(),
        "objective-c" | "objective-c++" | "objc++" => "objc".to_string(),
        other => other.to_string(),
    }
}

/// Maps file extensions to language names
#[derive(Debug, Clone)]
pub struct FiletypeResolver {
    filetype_map: HashMap<String, String>,
}

impl Default for FiletypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FiletypeResolver {
    /// Resolver knowing only the bundled extensions
    pub fn new() -> Self {
        let filetype_map = BUNDLED_EXTENSIONS
            .iter()
            .map(|ext| (ext.to_string(), BUNDLED_LANGUAGE.to_string()))
            .collect();
        Self { filetype_map }
    }

    /// Add a single filetype mapping; a leading dot is ignored.
    ///
    /// Returns the language the extension was previously mapped to.
    pub fn add_mapping(&mut self, extension: &str, language: &str) -> Option<String> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.filetype_map.insert(extension, language.to_string())
    }

    /// Language for a file path, falling back to the bundled grammar
    pub fn language_for_path(&self, path: &str) -> &str {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.filetype_map.get(&ext.to_ascii_lowercase()))
            .map_or(BUNDLED_LANGUAGE, String::as_str)
    }
}
