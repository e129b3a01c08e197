//! Form model and the fields-to-payload serialization.
//!
//! The payload transform is explicit: an ordered field list reduced to a
//! string mapping. Fields without a name are skipped, the last value wins on
//! duplicate names, and values stay raw strings with no coercion.

use serde_json::{Map, Value};

/// Static description of one form input: the visible label and the wire
/// field name its value is submitted under.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    pub name: &'static str,
}

/// One live input element.
#[derive(Clone, Debug, PartialEq)]
pub struct FormField {
    pub label: String,
    pub name: String,
    pub value: String,
}

/// The current form: an ordered field list plus which field has focus.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl FormState {
    /// Build a fresh, empty form from an action's field specs.
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        Self {
            fields: specs
                .iter()
                .map(|spec| FormField {
                    label: spec.label.to_string(),
                    name: spec.name.to_string(),
                    value: String::new(),
                })
                .collect(),
            focused: 0,
        }
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn set_focused_value(&mut self, value: String) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.value = value;
        }
    }

    /// Serialize the form into the request payload.
    pub fn payload(&self) -> Map<String, Value> {
        serialize_fields(&self.fields)
    }
}

/// Reduce an ordered field list to the request payload mapping.
///
/// Map insertion keeps the first occurrence's position while the later value
/// overwrites, so duplicates resolve last-value-wins without reordering.
pub fn serialize_fields(fields: &[FormField]) -> Map<String, Value> {
    let mut payload = Map::new();
    for field in fields {
        if field.name.is_empty() {
            continue;
        }
        payload.insert(field.name.clone(), Value::String(field.value.clone()));
    }
    payload
}
