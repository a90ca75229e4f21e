// Translation subsystem
//
// - record: a Translation overlay for one language
// - translatable: entities whose string attributes can be swapped between languages

mod record;
mod translatable;

pub use record::{normalize_language_code, Translation};
pub use translatable::{DefaultLanguageCode, TranslatableEntity, TranslationState};
