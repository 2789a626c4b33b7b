//! Contact form data: fields as read from the page, the outgoing submission
//! record, and the feedback banner.

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

use std::time::Duration;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key the generated submission time is sent under.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// How long a banner stays up before it auto-hides.
pub const BANNER_DISPLAY: Duration = Duration::from_secs(5);

/// Input kind of a form control, which decides the shape checks applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

/// One form control as read from the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into(), kind, required: false }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Flat field map plus the generated timestamp.
///
/// Serializes as a single JSON object. Field order follows the form; a later
/// field with a repeated name replaces the earlier value, and the generated
/// timestamp replaces any field called `timestamp`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSubmission {
    fields: Vec<(String, String)>,
    timestamp: String,
}

impl FormSubmission {
    #[must_use]
    pub fn from_fields(fields: &[FormField], timestamp: String) -> Self {
        let mut flat: Vec<(String, String)> = Vec::with_capacity(fields.len());
        for field in fields.iter().filter(|f| f.name != TIMESTAMP_FIELD) {
            match flat.iter_mut().find(|(name, _)| *name == field.name) {
                Some(slot) => slot.1.clone_from(&field.value),
                None => flat.push((field.name.clone(), field.value.clone())),
            }
        }
        Self { fields: flat, timestamp }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        if name == TIMESTAMP_FIELD {
            return Some(&self.timestamp);
        }
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Form fields in submission order, timestamp excluded.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for FormSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(TIMESTAMP_FIELD, &self.timestamp)?;
        map.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    /// CSS modifier class appended to `form-message`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient feedback message shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }

    /// Full class attribute for the banner element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("form-message {}", self.kind.css_class())
    }
}
