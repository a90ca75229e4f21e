// Errors raised by entity attribute access and translation management

use thiserror::Error;

/// Broad category of a [`ModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A lookup by name or language code found nothing
    NotFound,
    /// The entity is not in a state that allows the operation
    InvalidState,
}

/// Failure of an entity operation.
///
/// Messages are part of the observable contract and are kept stable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("No attribute named '{attribute}' has been found in the attribute translations !")]
    AttributeTranslationNotFound { attribute: String },

    #[error("No translation with the language code '{language_code}' is registered !")]
    TranslationNotFound { language_code: String },

    #[error("No translations associated to the entity !")]
    NoTranslations,

    #[error("Cannot add a translation for an entity which is already using the 'one language mode' !")]
    SingleLanguageMode,

    #[error("Translation attribute values must be of type 'String' !")]
    NotStringAttribute { attribute: String },

    #[error("No default language code is associated to the entity !")]
    MissingDefaultLanguageCode,

    #[error("Fail to get value of property '{attribute}' !")]
    PropertyGet { attribute: String },

    #[error("Fail to set value of property '{attribute}' !")]
    PropertySet { attribute: String },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::AttributeTranslationNotFound { .. }
            | ModelError::TranslationNotFound { .. }
            | ModelError::PropertyGet { .. }
            | ModelError::PropertySet { .. } => ErrorKind::NotFound,
            ModelError::NoTranslations
            | ModelError::SingleLanguageMode
            | ModelError::NotStringAttribute { .. }
            | ModelError::MissingDefaultLanguageCode => ErrorKind::InvalidState,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub(crate) fn translation_not_found(language_code: &str) -> Self {
        ModelError::TranslationNotFound {
            language_code: language_code.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_stable() {
        let err = ModelError::translation_not_found("ES");
        assert_eq!(
            err.to_string(),
            "No translation with the language code 'ES' is registered !"
        );

        let err = ModelError::AttributeTranslationNotFound {
            attribute: "unknownProperty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No attribute named 'unknownProperty' has been found in the attribute translations !"
        );

        assert_eq!(
            ModelError::SingleLanguageMode.to_string(),
            "Cannot add a translation for an entity which is already using the 'one language mode' !"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(ModelError::translation_not_found("FR").is_not_found());
        assert!(ModelError::PropertyGet { attribute: "a".to_string() }.is_not_found());
        assert_eq!(ModelError::NoTranslations.kind(), ErrorKind::InvalidState);
        assert_eq!(
            ModelError::NotStringAttribute { attribute: "a".to_string() }.kind(),
            ErrorKind::InvalidState
        );
    }
}
