use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(String);

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// The form-encoded field name, also used as the element id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// `None` for the multi-line message, which renders as a textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("text"),
            Self::Email => Some("email"),
            Self::Message => None,
        }
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Returns a copy of the form with a single field replaced.
    pub fn with(&self, field: ContactField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    /// Routes an input event by the target's `name` attribute.
    pub fn apply_input(&self, name: &str, value: impl Into<String>) -> Result<Self, UnknownField> {
        let field = name.parse::<ContactField>()?;
        Ok(self.with(field, value))
    }
}
