// Validation tags and schemas

use std::fmt;

/// Tag keyword that skips a field's remaining rules when its value is empty.
pub const OMIT_EMPTY: &str = "omitempty";

/// One `name` or `name=param` entry of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleCall {
    pub name: String,
    pub param: String,
}

impl RuleCall {
    /// Split a tag entry at its first `=`.
    pub fn parse(entry: &str) -> Self {
        let (name, param) = entry.split_once('=').unwrap_or((entry, ""));
        Self {
            name: name.trim().to_string(),
            param: param.to_string(),
        }
    }
}

impl fmt::Display for RuleCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.param.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}={}", self.name, self.param)
        }
    }
}

/// Parse a comma separated tag such as `"required,decimal=10:2"`.
///
/// Blank entries are ignored.
///
/// ```
/// use xvalidator_rules::{parse_tag, RuleCall};
///
/// let rules = parse_tag("required, decimal_if=2@Mode=credit");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].name, "decimal_if");
/// assert_eq!(rules[1].param, "2@Mode=credit");
/// ```
pub fn parse_tag(tag: &str) -> Vec<RuleCall> {
    tag.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(RuleCall::parse)
        .collect()
}

/// Rules attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: String,
    pub rules: Vec<RuleCall>,
}

/// Ordered mapping of field names to their rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tag to a field; fields are validated in the order added
    pub fn field(mut self, name: impl Into<String>, tag: &str) -> Self {
        self.fields.push(FieldRules {
            field: name.into(),
            rules: parse_tag(tag),
        });
        self
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Rules for a field, if the schema mentions it
    pub fn get(&self, field: &str) -> Option<&FieldRules> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
