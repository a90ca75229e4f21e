// Entity Model - Core Library
// Base entity types: identity, by-name attributes, timestamps, JSON metadata
// and multi-language translations of string attributes.

pub mod attributes;
pub mod entities;
pub mod entity;
pub mod error;
pub mod temporal;
pub mod translation;

// Re-export commonly used types
pub use attributes::{
    AttributeDefinition, AttributeRegistry, AttributeType, AttributeValue, Attributes,
};
pub use entities::{Action, State};
pub use entity::Entity;
pub use error::{ErrorKind, ModelError, Result};
pub use temporal::{Timestamps, WithCreationDate, WithUpdateDate};
pub use translation::{
    normalize_language_code, DefaultLanguageCode, TranslatableEntity, Translation,
    TranslationState,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
