//! Flat key-value state for one form section.

use std::collections::BTreeMap;

/// Field values for a fixed schema. Every schema field is always present;
/// a fresh store holds empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    schema: &'static [&'static str],
    values: Vec<String>,
}

impl FieldStore {
    pub fn new(schema: &'static [&'static str]) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.len()],
        }
    }

    pub fn schema(&self) -> &'static [&'static str] {
        self.schema
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    /// `None` for fields outside the schema.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.position(field).map(|idx| self.values[idx].as_str())
    }

    /// Replaces one field value. Unknown fields are ignored and report `false`.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.position(field) {
            Some(idx) => {
                self.values[idx] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.schema
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(field, value)| (field.to_string(), value.to_string()))
            .collect()
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.schema.iter().position(|known| *known == field)
    }
}
