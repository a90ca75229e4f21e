// Attribute Registry - explicit per-type field table
// Replaces name-based reflection: every concrete entity declares its fields once,
// with their declared type and a getter/setter pair.

use crate::error::{ModelError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

// ============================================================================
// ATTRIBUTE TYPES
// ============================================================================

/// Declared kind of an entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
    String,
    Number,
    Integer,
    DateTime,
    Boolean,
    Json,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "String",
            AttributeType::Number => "Number",
            AttributeType::Integer => "Integer",
            AttributeType::DateTime => "DateTime",
            AttributeType::Boolean => "Boolean",
            AttributeType::Json => "Json",
        }
    }
}

/// Value read from or written to an entity field.
///
/// `Null` stands for an unset field and is accepted by every declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    String(String),
    Number(f64),
    Integer(i64),
    DateTime(DateTime<Utc>),
    Boolean(bool),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Type carried by this value, `None` for `Null`
    pub fn type_(&self) -> Option<AttributeType> {
        match self {
            AttributeValue::Null => None,
            AttributeValue::String(_) => Some(AttributeType::String),
            AttributeValue::Number(_) => Some(AttributeType::Number),
            AttributeValue::Integer(_) => Some(AttributeType::Integer),
            AttributeValue::DateTime(_) => Some(AttributeType::DateTime),
            AttributeValue::Boolean(_) => Some(AttributeType::Boolean),
            AttributeValue::Json(_) => Some(AttributeType::Json),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Whether this value may be stored in a field declared as `type_`
    pub fn is_compatible_with(&self, type_: AttributeType) -> bool {
        self.type_().map_or(true, |t| t == type_)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    // Conversions used by field setters. The rejected value is handed back on mismatch.

    pub fn into_optional_string(self) -> std::result::Result<Option<String>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::String(s) => Ok(Some(s)),
            other => Err(other),
        }
    }

    pub fn into_optional_integer(self) -> std::result::Result<Option<i64>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::Integer(i) => Ok(Some(i)),
            other => Err(other),
        }
    }

    pub fn into_optional_number(self) -> std::result::Result<Option<f64>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::Number(n) => Ok(Some(n)),
            other => Err(other),
        }
    }

    pub fn into_optional_boolean(self) -> std::result::Result<Option<bool>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::Boolean(b) => Ok(Some(b)),
            other => Err(other),
        }
    }

    pub fn into_optional_datetime(
        self,
    ) -> std::result::Result<Option<DateTime<Utc>>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::DateTime(d) => Ok(Some(d)),
            other => Err(other),
        }
    }

    pub fn into_optional_json(
        self,
    ) -> std::result::Result<Option<serde_json::Value>, AttributeValue> {
        match self {
            AttributeValue::Null => Ok(None),
            AttributeValue::Json(v) => Ok(Some(v)),
            other => Err(other),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttributeValue::DateTime(value)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        AttributeValue::Json(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttributeValue::Null, Into::into)
    }
}

// ============================================================================
// ATTRIBUTE DEFINITION
// ============================================================================

pub type Getter<E> = fn(&E) -> AttributeValue;
pub type Setter<E> = fn(&mut E, AttributeValue) -> std::result::Result<(), AttributeValue>;

/// One field of entity type `E`: its name, declared type and accessors.
pub struct AttributeDefinition<E> {
    /// Field name used by `get` / `set` and by translations
    pub name: String,

    /// Declared type of the field
    pub type_: AttributeType,

    /// What does this field hold?
    pub description: String,

    getter: Getter<E>,
    setter: Setter<E>,
}

impl<E> AttributeDefinition<E> {
    pub fn new(
        name: impl Into<String>,
        type_: AttributeType,
        getter: Getter<E>,
        setter: Setter<E>,
    ) -> Self {
        AttributeDefinition {
            name: name.into(),
            type_,
            description: String::new(),
            getter,
            setter,
        }
    }

    /// Builder: add description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn read(&self, entity: &E) -> AttributeValue {
        (self.getter)(entity)
    }

    /// Writes `value`, handing it back when it does not fit the declared type
    pub fn write(
        &self,
        entity: &mut E,
        value: AttributeValue,
    ) -> std::result::Result<(), AttributeValue> {
        if !value.is_compatible_with(self.type_) {
            return Err(value);
        }
        (self.setter)(entity, value)
    }
}

impl<E> fmt::Debug for AttributeDefinition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDefinition")
            .field("name", &self.name)
            .field("type_", &self.type_)
            .field("description", &self.description)
            .finish()
    }
}

// ============================================================================
// ATTRIBUTE REGISTRY
// ============================================================================

/// Catalog of the fields of one entity type.
///
/// Built once per concrete type and consulted for every by-name access.
#[derive(Debug)]
pub struct AttributeRegistry<E> {
    attributes: HashMap<String, AttributeDefinition<E>>,
}

impl<E> AttributeRegistry<E> {
    pub fn new() -> Self {
        AttributeRegistry {
            attributes: HashMap::new(),
        }
    }

    /// Register a field, replacing any previous definition with the same name
    pub fn register(&mut self, attr: AttributeDefinition<E>) {
        self.attributes.insert(attr.name.clone(), attr);
    }

    /// Builder: register a field
    pub fn with(mut self, attr: AttributeDefinition<E>) -> Self {
        self.register(attr);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDefinition<E>> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn type_of(&self, name: &str) -> Option<AttributeType> {
        self.attributes.get(name).map(|attr| attr.type_)
    }

    /// Registered field names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn count(&self) -> usize {
        self.attributes.len()
    }
}

impl<E> Default for AttributeRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ATTRIBUTES CAPABILITY
// ============================================================================

/// Generic by-name access to the fields of an entity.
///
/// Implementors only provide their registry; typically a `static OnceLock`
/// filled on first use.
pub trait Attributes: Sized + 'static {
    fn attribute_registry() -> &'static AttributeRegistry<Self>;

    /// Reads the field `name`
    fn get(&self, name: &str) -> Result<AttributeValue> {
        let attr = Self::attribute_registry()
            .get(name)
            .ok_or_else(|| ModelError::PropertyGet {
                attribute: name.to_string(),
            })?;
        Ok(attr.read(self))
    }

    /// Overwrites the field `name`; fails on unknown names and on type mismatch
    fn set(&mut self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        let attr = Self::attribute_registry()
            .get(name)
            .ok_or_else(|| ModelError::PropertySet {
                attribute: name.to_string(),
            })?;
        attr.write(self, value.into()).map_err(|rejected| {
            warn!(
                attribute = name,
                declared = attr.type_.as_str(),
                given = ?rejected.type_(),
                "rejected attribute value"
            );
            ModelError::PropertySet {
                attribute: name.to_string(),
            }
        })
    }

    /// Declared type of the field `name`
    fn attribute_type(name: &str) -> Result<AttributeType> {
        Self::attribute_registry()
            .type_of(name)
            .ok_or_else(|| ModelError::PropertyGet {
                attribute: name.to_string(),
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    #[derive(Debug, Default)]
    struct Sample {
        a: Option<String>,
        count: Option<i64>,
        ratio: Option<f64>,
        active: Option<bool>,
    }

    impl Attributes for Sample {
        fn attribute_registry() -> &'static AttributeRegistry<Self> {
            static REGISTRY: OnceLock<AttributeRegistry<Sample>> = OnceLock::new();
            REGISTRY.get_or_init(|| {
                AttributeRegistry::new()
                    .with(
                        AttributeDefinition::new(
                            "a",
                            AttributeType::String,
                            |e: &Sample| e.a.clone().into(),
                            |e: &mut Sample, v: AttributeValue| {
                                e.a = v.into_optional_string()?;
                                Ok(())
                            },
                        )
                        .with_description("Free text"),
                    )
                    .with(AttributeDefinition::new(
                        "count",
                        AttributeType::Integer,
                        |e: &Sample| e.count.into(),
                        |e: &mut Sample, v: AttributeValue| {
                            e.count = v.into_optional_integer()?;
                            Ok(())
                        },
                    ))
                    .with(AttributeDefinition::new(
                        "ratio",
                        AttributeType::Number,
                        |e: &Sample| e.ratio.into(),
                        |e: &mut Sample, v: AttributeValue| {
                            e.ratio = v.into_optional_number()?;
                            Ok(())
                        },
                    ))
                    .with(AttributeDefinition::new(
                        "active",
                        AttributeType::Boolean,
                        |e: &Sample| e.active.into(),
                        |e: &mut Sample, v: AttributeValue| {
                            e.active = v.into_optional_boolean()?;
                            Ok(())
                        },
                    ))
            })
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry = Sample::attribute_registry();

        assert_eq!(registry.count(), 4);
        assert_eq!(registry.names(), vec!["a", "active", "count", "ratio"]);
        assert_eq!(registry.type_of("a"), Some(AttributeType::String));
        assert_eq!(registry.type_of("count"), Some(AttributeType::Integer));
        assert!(registry.type_of("missing").is_none());
        assert_eq!(registry.get("a").unwrap().description, "Free text");
    }

    #[test]
    fn test_get_and_set_by_name() {
        let mut sample = Sample::default();
        assert_eq!(sample.get("a").unwrap(), AttributeValue::Null);

        sample.set("a", "A_VALUE").unwrap();
        assert_eq!(sample.a.as_deref(), Some("A_VALUE"));

        sample.set("a", "NEW_A_VALUE").unwrap();
        assert_eq!(sample.get("a").unwrap().as_str(), Some("NEW_A_VALUE"));

        sample.set("count", 42i64).unwrap();
        assert_eq!(sample.get("count").unwrap(), AttributeValue::Integer(42));

        sample.set("count", AttributeValue::Null).unwrap();
        assert!(sample.count.is_none());
    }

    #[test]
    fn test_unknown_attribute_fails() {
        let mut sample = Sample::default();

        let err = sample.get("b").unwrap_err();
        assert_eq!(err.to_string(), "Fail to get value of property 'b' !");

        let err = sample.set("b", "x").unwrap_err();
        assert_eq!(err.to_string(), "Fail to set value of property 'b' !");

        assert!(Sample::attribute_type("b").is_err());
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let mut sample = Sample::default();
        sample.set("count", 7i64).unwrap();

        let err = sample.set("count", "999").unwrap_err();
        assert_eq!(err.to_string(), "Fail to set value of property 'count' !");
        assert_eq!(sample.count, Some(7));
    }

    #[test]
    fn test_number_and_boolean_fields() {
        let mut sample = Sample::default();
        assert!(sample.get("ratio").unwrap().is_null());
        assert!(sample.get("active").unwrap().is_null());

        sample.set("ratio", 0.75).unwrap();
        sample.set("active", true).unwrap();
        assert_eq!(sample.ratio, Some(0.75));
        assert_eq!(sample.get("active").unwrap(), AttributeValue::Boolean(true));

        // Integers are not numbers
        assert!(sample.set("ratio", 3i64).is_err());
        assert!(sample.set("active", "yes").is_err());
        assert_eq!(sample.ratio, Some(0.75));
        assert_eq!(sample.active, Some(true));

        sample.set("active", None::<bool>).unwrap();
        assert!(sample.active.is_none());
        assert!(!sample.get("ratio").unwrap().is_null());
    }

    #[test]
    fn test_value_compatibility() {
        assert!(AttributeValue::Null.is_compatible_with(AttributeType::Boolean));
        assert!(AttributeValue::from("x").is_compatible_with(AttributeType::String));
        assert!(!AttributeValue::from(1.5).is_compatible_with(AttributeType::Integer));
        assert_eq!(AttributeValue::from(None::<String>), AttributeValue::Null);
    }
}
