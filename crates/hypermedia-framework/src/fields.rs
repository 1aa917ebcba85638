//! # Field Selection
//!
//! Clients may restrict the fields written for a resource type, e.g.
//! `?fields[BlogPosting]=headline,creator`. A type without an entry exposes every
//! field. The selection applies to data fields, static links, binary resources and
//! relations alike; type labels and self links are always written.

use std::collections::{HashMap, HashSet};

/// Decides whether a field of a resource type is written.
pub trait FieldSelection: Send + Sync {
    fn allows(&self, type_name: &str, field_name: &str) -> bool;

    /// A field is written only if every type label of the resource allows it.
    fn allows_all(&self, types: &[String], field_name: &str) -> bool {
        types.iter().all(|type_name| self.allows(type_name, field_name))
    }
}

impl<F> FieldSelection for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn allows(&self, type_name: &str, field_name: &str) -> bool {
        self(type_name, field_name)
    }
}

/// Per-type allow-lists of field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    allowed: HashMap<String, HashSet<String>>,
}

impl Fields {
    /// A selection that allows every field of every type.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts `type_name` to the given fields.
    pub fn with<I, S>(mut self, type_name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed
            .entry(type_name.into())
            .or_default()
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Parses one `fields[Type]=a,b` query parameter. Returns `None` for other keys.
    pub fn parse_param(key: &str, value: &str) -> Option<(String, Vec<String>)> {
        let type_name = key.strip_prefix("fields[")?.strip_suffix(']')?;
        if type_name.is_empty() {
            return None;
        }
        let fields = value
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        Some((type_name.to_string(), fields))
    }

    pub fn is_restricted(&self, type_name: &str) -> bool {
        self.allowed.contains_key(type_name)
    }
}

impl FieldSelection for Fields {
    fn allows(&self, type_name: &str, field_name: &str) -> bool {
        self.allowed
            .get(type_name)
            .map_or(true, |fields| fields.contains(field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_type_allows_everything() {
        let fields = Fields::all().with("Person", ["name"]);
        assert!(fields.allows("BlogPosting", "headline"));
        assert!(fields.allows("Person", "name"));
        assert!(!fields.allows("Person", "email"));
        assert!(!fields.is_restricted("BlogPosting"));
    }

    #[test]
    fn test_allows_all_checks_every_type_label() {
        let fields = Fields::all().with("Thing", ["name", "url"]);
        let types = vec!["Person".to_string(), "Thing".to_string()];
        assert!(fields.allows_all(&types, "name"));
        assert!(!fields.allows_all(&types, "email"));
        assert!(fields.allows_all(&[], "email"));
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(
            Fields::parse_param("fields[Person]", "name, email,,"),
            Some((
                "Person".to_string(),
                vec!["name".to_string(), "email".to_string()]
            ))
        );
        assert_eq!(Fields::parse_param("fields[]", "name"), None);
        assert_eq!(Fields::parse_param("embedded", "creator"), None);
    }

    #[test]
    fn test_closure_selection() {
        let no_emails = |_: &str, field: &str| field != "email";
        assert!(no_emails.allows("Person", "name"));
        assert!(!no_emails.allows("Person", "email"));
    }
}
