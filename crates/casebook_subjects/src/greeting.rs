//! Greeting subject and its language table.
//!
//! The mapping from a language tag to a greeting prefix is plain data held by [`GreetingTable`]. Callers that need
//! more languages build their own table instead of editing the greeter.

/// Language tag used when a caller does not supply one that the table knows.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Name substituted when the caller passes an empty name.
pub const DEFAULT_NAME: &str = "World";

/// Language tag -> greeting prefix table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingTable {
    /// Name used when the caller passes an empty string
    default_name: String,
    /// Prefix used for tags missing from `entries`
    fallback_prefix: String,
    /// Ordered (tag, prefix) pairs; later entries shadow earlier ones
    entries: Vec<(String, String)>,
}

impl Default for GreetingTable {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            fallback_prefix: "Hello".to_string(),
            entries: vec![
                (DEFAULT_LANGUAGE.to_string(), "Hello".to_string()),
                ("Spanish".to_string(), "Hola".to_string()),
                ("French".to_string(), "Bonjour".to_string()),
            ],
        }
    }
}

impl GreetingTable {
    /// Create a table with the built-in languages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the prefix for a language tag.
    pub fn with_language(mut self, tag: impl Into<String>, prefix: impl Into<String>) -> Self {
        let tag = tag.into();
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = prefix,
            None => self.entries.push((tag, prefix)),
        }
        self
    }

    /// Set the name used for empty input.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Prefix for a language tag, falling back to the English greeting.
    ///
    /// Tags are matched exactly; `"spanish"` is not `"Spanish"`.
    pub fn prefix_for(&self, language: &str) -> &str {
        self.entries
            .iter()
            .rev()
            .find(|(tag, _)| tag == language)
            .map(|(_, prefix)| prefix.as_str())
            .unwrap_or(self.fallback_prefix.as_str())
    }

    /// Language tags known to this table, in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(tag, _)| tag.as_str())
    }

    /// Greet `name` in `language`.
    pub fn greet(&self, name: &str, language: &str) -> String {
        let name = if name.is_empty() { self.default_name.as_str() } else { name };
        format!("{}, {}", self.prefix_for(language), name)
    }
}

/// Greet `name` in `language` using the built-in table.
pub fn hello(name: &str, language: &str) -> String {
    GreetingTable::default().greet(name, language)
}
