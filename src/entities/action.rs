// Action Entity - something that happened, with its JSON metadata

use crate::attributes::{AttributeDefinition, AttributeRegistry, AttributeType, AttributeValue, Attributes};
use crate::entities::{insert_metadata, metadata_value};
use crate::entity::Entity;
use crate::temporal::WithCreationDate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Action Entity
///
/// Identity: UUID string
/// Values: name, metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Stable identity (UUID)
    pub id: Option<String>,

    /// Name of the action (e.g. "user.login")
    pub name: Option<String>,

    /// Free-form JSON metadata
    pub metadata: Option<Value>,

    pub creation_date: Option<DateTime<Utc>>,
}

impl Action {
    /// Create new action with a fresh UUID, created now
    pub fn new(name: impl Into<String>) -> Self {
        Action {
            id: Some(uuid::Uuid::new_v4().to_string()),
            name: Some(name.into()),
            metadata: None,
            creation_date: Some(Utc::now()),
        }
    }

    /// Builder: add metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn metadata_value(&self, key: &str) -> Option<&Value> {
        metadata_value(&self.metadata, key)
    }

    pub fn set_metadata_value(&mut self, key: &str, value: Value) {
        insert_metadata(&mut self.metadata, key, value);
    }
}

impl Attributes for Action {
    fn attribute_registry() -> &'static AttributeRegistry<Self> {
        static REGISTRY: OnceLock<AttributeRegistry<Action>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            AttributeRegistry::new()
                .with(
                    AttributeDefinition::new(
                        "name",
                        AttributeType::String,
                        |a: &Action| a.name.clone().into(),
                        |a: &mut Action, v: AttributeValue| {
                            a.name = v.into_optional_string()?;
                            Ok(())
                        },
                    )
                    .with_description("Name of the action"),
                )
                .with(AttributeDefinition::new(
                    "metadata",
                    AttributeType::Json,
                    |a: &Action| a.metadata.clone().into(),
                    |a: &mut Action, v: AttributeValue| {
                        a.metadata = v.into_optional_json()?;
                        Ok(())
                    },
                ))
                .with(AttributeDefinition::new(
                    "creation_date",
                    AttributeType::DateTime,
                    |a: &Action| a.creation_date.into(),
                    |a: &mut Action, v: AttributeValue| {
                        a.creation_date = v.into_optional_datetime()?;
                        Ok(())
                    },
                ))
        })
    }
}

impl Entity for Action {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl WithCreationDate for Action {
    fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    fn set_creation_date(&mut self, creation_date: Option<DateTime<Utc>>) {
        self.creation_date = creation_date;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_creation() {
        let action = Action::new("user.login");

        assert!(action.has_id());
        assert_eq!(action.name.as_deref(), Some("user.login"));
        assert!(action.metadata.is_none());
        assert!(action.creation_date().is_some());
    }

    #[test]
    fn test_default_action_is_empty() {
        let action = Action::default();

        assert!(action.id().is_none());
        assert!(action.name.is_none());
        assert!(action.creation_date().is_none());
    }

    #[test]
    fn test_action_metadata() {
        let mut action = Action::new("user.login").with_metadata(json!({"ip": "10.0.0.1"}));
        action.set_metadata_value("attempt", json!(2));

        assert_eq!(action.metadata_value("ip"), Some(&json!("10.0.0.1")));
        assert_eq!(action.metadata_value("attempt"), Some(&json!(2)));
        assert!(action.metadata_value("missing").is_none());
    }

    #[test]
    fn test_metadata_created_when_absent() {
        let mut action = Action::default();
        action.set_metadata_value("source", json!("api"));

        assert_eq!(action.metadata, Some(json!({"source": "api"})));
    }

    #[test]
    fn test_action_attributes_by_name() {
        let mut action = Action::new("user.login");

        action.set("name", "user.logout").unwrap();
        assert_eq!(action.get("name").unwrap().as_str(), Some("user.logout"));

        action.set("metadata", json!({"k": "v"})).unwrap();
        assert_eq!(action.metadata_value("k"), Some(&json!("v")));

        assert!(action.set("name", 3i64).is_err());
        assert!(action.get("id").is_err());
    }

    #[test]
    fn test_distinct_ids() {
        let a = Action::new("a");
        let b = Action::new("a");
        assert_ne!(a.id, b.id);
    }
}
