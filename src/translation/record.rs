// Translation record - one language, field name -> translated string

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize a language code to the stored form (upper case, e.g. "fr" -> "FR").
pub fn normalize_language_code(code: &str) -> String {
    code.to_uppercase()
}

/// Translated values of some string attributes of an entity, in one language.
///
/// A value may be `None`: content displaced from an unset field is filed that way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// ISO 639-1 code, always upper case
    language_code: String,

    attribute_translations: HashMap<String, Option<String>>,
}

impl Translation {
    pub fn new(language_code: &str) -> Self {
        Translation {
            language_code: normalize_language_code(language_code),
            attribute_translations: HashMap::new(),
        }
    }

    /// Builder: add an attribute translation
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute_translation(name, value);
        self
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// Any case is accepted, the code is stored upper case
    pub fn set_language_code(&mut self, language_code: &str) {
        self.language_code = normalize_language_code(language_code);
    }

    /// Fails only when `name` has no entry; an entry may hold `None`
    pub fn attribute_translation(&self, name: &str) -> Result<Option<&str>> {
        self.attribute_translations
            .get(name)
            .map(Option::as_deref)
            .ok_or_else(|| ModelError::AttributeTranslationNotFound {
                attribute: name.to_string(),
            })
    }

    pub fn set_attribute_translation(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attribute_translations.insert(name.into(), Some(value.into()));
    }

    /// Record `name` with no value
    pub fn set_null_attribute_translation(&mut self, name: impl Into<String>) {
        self.attribute_translations.insert(name.into(), None);
    }

    pub fn attribute_translations(&self) -> &HashMap<String, Option<String>> {
        &self.attribute_translations
    }

    pub fn contains_attribute(&self, name: &str) -> bool {
        self.attribute_translations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attribute_translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attribute_translations.is_empty()
    }
}
