// Translatable entities
//
// An entity's string fields are authored in a default language. Other languages are kept
// as Translation overlays next to the entity and can be swapped into the live fields.
//
// States:
// - NEUTRAL:   no translation language code, live fields hold the default language
// - ACTIVE(L): live fields hold language L, the displaced content sits in the overlays

use crate::attributes::{AttributeType, AttributeValue, Attributes};
use crate::entity::Entity;
use crate::error::{ModelError, Result};
use crate::translation::record::{normalize_language_code, Translation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

// ============================================================================
// TRANSLATION STATE
// ============================================================================

/// Translation bookkeeping embedded in every translatable entity.
///
/// `translations` is keyed by the upper-cased language code of each record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationState {
    /// Language the live fields are authored in
    default_language_code: Option<String>,

    /// Set only while the live fields hold a non-default language
    translation_language_code: Option<String>,

    translations: Option<HashMap<String, Translation>>,
}

impl TranslationState {
    pub fn new(default_language_code: Option<&str>) -> Self {
        TranslationState {
            default_language_code: default_language_code.map(str::to_string),
            ..Default::default()
        }
    }

    fn check_registered(&self, language_code: &str) -> Result<()> {
        match &self.translations {
            Some(translations) if translations.contains_key(language_code) => Ok(()),
            _ => Err(ModelError::translation_not_found(language_code)),
        }
    }
}

// ============================================================================
// DEFAULT LANGUAGE CODE
// ============================================================================

/// Access to the language an entity is authored in.
///
/// Codes are expected upper case (ISO 639-1); the setter stores them as given.
pub trait DefaultLanguageCode {
    fn default_language_code(&self) -> Option<&str>;

    fn set_default_language_code(&mut self, default_language_code: Option<&str>);
}

impl<T: TranslatableEntity> DefaultLanguageCode for T {
    fn default_language_code(&self) -> Option<&str> {
        self.translation_state().default_language_code.as_deref()
    }

    fn set_default_language_code(&mut self, default_language_code: Option<&str>) {
        self.translation_state_mut().default_language_code =
            default_language_code.map(str::to_string);
    }
}

// ============================================================================
// TRANSLATABLE ENTITY
// ============================================================================

/// Entity whose string attributes can be translated.
///
/// Implementors embed a [`TranslationState`] and expose it; every operation is provided.
/// Language codes passed to lookups are matched exactly against the stored upper-case keys.
pub trait TranslatableEntity: Entity {
    fn translation_state(&self) -> &TranslationState;

    fn translation_state_mut(&mut self) -> &mut TranslationState;

    fn translation_language_code(&self) -> Option<&str> {
        self.translation_state().translation_language_code.as_deref()
    }

    /// Plain setter, the code is stored as given
    fn set_translation_language_code(&mut self, translation_language_code: Option<&str>) {
        self.translation_state_mut().translation_language_code =
            translation_language_code.map(str::to_string);
    }

    fn translations(&self) -> Option<&HashMap<String, Translation>> {
        self.translation_state().translations.as_ref()
    }

    /// Replace the whole overlay collection
    fn set_translations(&mut self, translations: Option<HashMap<String, Translation>>) {
        self.translation_state_mut().translations = translations;
    }

    /// True when a translation is applied or at least one overlay is attached
    fn is_translated(&self) -> bool {
        let state = self.translation_state();
        state.translation_language_code.is_some()
            || state.translations.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Attach (or replace) the overlay for the translation's language.
    ///
    /// Rejected while a translation is applied: the live fields are not the default content.
    fn set_translation(&mut self, translation: Translation) -> Result<()> {
        let state = self.translation_state_mut();
        if let Some(active) = &state.translation_language_code {
            warn!(active = %active, language = %translation.language_code(), "entity uses one language mode, translation rejected");
            return Err(ModelError::SingleLanguageMode);
        }

        let language_code = normalize_language_code(translation.language_code());
        debug!(language = %language_code, attributes = translation.len(), "translation registered");
        state
            .translations
            .get_or_insert_with(HashMap::new)
            .insert(language_code, translation);
        Ok(())
    }

    fn translation(&self, language_code: &str) -> Result<&Translation> {
        self.translations()
            .and_then(|translations| translations.get(language_code))
            .ok_or_else(|| ModelError::translation_not_found(language_code))
    }

    /// Remove one overlay. The collection stays present even when it becomes empty.
    fn delete_translation(&mut self, language_code: &str) -> Result<()> {
        let state = self.translation_state_mut();
        let removed = state
            .translations
            .as_mut()
            .and_then(|translations| translations.remove(language_code));

        if removed.is_none() {
            return Err(ModelError::translation_not_found(language_code));
        }
        debug!(language = language_code, "translation deleted");
        Ok(())
    }

    /// Remove several overlays, or all of them with `None`.
    ///
    /// Every code is checked before anything is removed: on error the overlays are untouched.
    fn delete_translations(&mut self, language_codes: Option<&[&str]>) -> Result<()> {
        let state = self.translation_state_mut();

        let Some(language_codes) = language_codes else {
            debug!("all translations deleted");
            state.translations = None;
            return Ok(());
        };

        for language_code in language_codes {
            state.check_registered(language_code)?;
        }

        if let Some(translations) = state.translations.as_mut() {
            for language_code in language_codes {
                translations.remove(*language_code);
            }
        }
        debug!(count = language_codes.len(), "translations deleted");
        Ok(())
    }

    /// Swap the live string attributes to `language_code`.
    ///
    /// The displaced content is filed as an overlay under the previously displayed language
    /// and the applied overlay is consumed. Applying the displayed language is a no-op;
    /// applying the default language goes back to the neutral state.
    fn apply_translation(&mut self, language_code: &str) -> Result<()> {
        let state = self.translation_state();
        let previous = state
            .translation_language_code
            .as_deref()
            .or(state.default_language_code.as_deref());

        if previous == Some(language_code) {
            trace!(language = language_code, "translation already applied");
            return Ok(());
        }

        let translations = state.translations.as_ref().ok_or_else(|| {
            warn!(language = language_code, "no translations to apply");
            ModelError::NoTranslations
        })?;
        let target = translations
            .get(language_code)
            .ok_or_else(|| ModelError::translation_not_found(language_code))?;
        let previous = previous.ok_or(ModelError::MissingDefaultLanguageCode)?;

        // Check every attribute and capture the displaced values before touching any field
        let mut displaced = Translation::new(previous);
        let mut updates = Vec::with_capacity(target.len());
        for (name, value) in target.attribute_translations() {
            if Self::attribute_type(name)? != AttributeType::String {
                warn!(attribute = %name, "translated attribute is not a string");
                return Err(ModelError::NotStringAttribute {
                    attribute: name.clone(),
                });
            }
            match self.get(name)? {
                AttributeValue::String(current) => {
                    displaced.set_attribute_translation(name.clone(), current)
                }
                current => {
                    debug_assert!(current.is_null());
                    displaced.set_null_attribute_translation(name.clone());
                }
            }
            updates.push((name.clone(), AttributeValue::from(value.clone())));
        }

        // Every value is a string or null written to a string field: no write below can fail
        let from = previous.to_string();
        for (name, value) in updates {
            debug_assert!(value.is_compatible_with(AttributeType::String));
            self.set(&name, value)?;
        }

        let state = self.translation_state_mut();
        state.translation_language_code = None;
        if let Some(translations) = state.translations.as_mut() {
            translations.remove(language_code);
            translations.insert(displaced.language_code().to_string(), displaced);
        }
        if state.default_language_code.as_deref() != Some(language_code) {
            state.translation_language_code = Some(language_code.to_string());
        }

        debug!(from = %from, to = language_code, "translation applied");
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
