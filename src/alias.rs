//! Insertion-ordered alias store and one-pass alias expansion.

use indexmap::IndexMap;

use crate::error::ShellError;
use crate::tokenizer::tokenize;

/// Name -> raw replacement text, in definition order. Redefining an
/// existing name updates its value in place and keeps its original
/// position, matching `IndexMap::insert`'s semantics.
#[derive(Debug, Default)]
pub struct AliasStore {
    entries: IndexMap<String, String>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    pub fn set(&mut self, name: &str, replacement: &str) {
        self.entries.insert(name.to_string(), replacement.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    pub fn unset(&mut self, name: &str) -> bool {
        self.entries.shift_remove(name).is_some()
    }

    /// Iterate `(name, replacement)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Expand `argv[0]` if it names an alias, re-tokenizing the replacement
/// text and splicing its tokens in place of the original first word.
/// Expansion happens exactly once; the replacement's own first word is
/// never looked up again, so `alias x='x'` does not loop.
pub fn expand_first_word(store: &AliasStore, argv: Vec<String>) -> Result<Vec<String>, ShellError> {
    if argv.is_empty() {
        return Ok(argv);
    }
    match store.get(&argv[0]) {
        Some(replacement) => {
            let tokens = tokenize(replacement)?;
            let mut expanded: Vec<String> = tokens.into_iter().map(|t| t.text).collect();
            expanded.extend(argv.into_iter().skip(1));
            Ok(expanded)
        }
        None => Ok(argv),
    }
}

/// Parse the `name='value'` (or `name=value`) argument accepted by the
/// `alias` builtin. Surrounding single quotes are stripped if balanced.
pub fn parse_definition(arg: &str) -> Option<(String, String)> {
    let eq = arg.find('=')?;
    let (name, rest) = arg.split_at(eq);
    let value = &rest[1..];
    if name.is_empty() || !name.chars().next().unwrap().is_ascii_alphabetic() && name.chars().next() != Some('_') {
        return None;
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let value = if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        &value[1..value.len() - 1]
    } else {
        value
    };
    Some((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let mut s = AliasStore::new();
        s.set("ll", "ls -l");
        assert_eq!(s.get("ll"), Some("ls -l"));
    }

    #[test]
    fn redefinition_preserves_insertion_order() {
        let mut s = AliasStore::new();
        s.set("a", "1");
        s.set("b", "2");
        s.set("a", "3");
        let names: Vec<&str> = s.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(s.get("a"), Some("3"));
    }

    #[test]
    fn unset_removes_entry() {
        let mut s = AliasStore::new();
        s.set("a", "1");
        assert!(s.unset("a"));
        assert!(s.get("a").is_none());
        assert!(!s.unset("a"));
    }

    #[test]
    fn expansion_replaces_first_word_only() {
        let mut s = AliasStore::new();
        s.set("x", "echo y");
        let out = expand_first_word(&s, vec!["x".to_string(), "z".to_string()]).unwrap();
        assert_eq!(out, vec!["echo", "y", "z"]);
    }

    #[test]
    fn expansion_is_one_pass_for_self_referential_alias() {
        let mut s = AliasStore::new();
        s.set("x", "x");
        let out = expand_first_word(&s, vec!["x".to_string()]).unwrap();
        assert_eq!(out, vec!["x"]);
    }

    #[test]
    fn unknown_verb_is_unchanged() {
        let s = AliasStore::new();
        let out = expand_first_word(&s, vec!["pwd".to_string()]).unwrap();
        assert_eq!(out, vec!["pwd"]);
    }

    #[test]
    fn parse_definition_strips_single_quotes() {
        let (name, value) = parse_definition("x='echo y'").unwrap();
        assert_eq!(name, "x");
        assert_eq!(value, "echo y");
    }

    #[test]
    fn parse_definition_rejects_missing_equals() {
        assert!(parse_definition("x").is_none());
    }
}
