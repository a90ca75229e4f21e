// State Entity - named state with a human-readable message and JSON metadata

use crate::attributes::{AttributeDefinition, AttributeRegistry, AttributeType, AttributeValue, Attributes};
use crate::entities::{insert_metadata, metadata_value};
use crate::entity::Entity;
use crate::temporal::WithCreationDate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: Option<String>,
    pub name: Option<String>,
    pub message: Option<String>,
    pub metadata: Option<Value>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl State {
    /// Create new state with a fresh UUID, created now
    pub fn new(name: impl Into<String>) -> Self {
        State {
            id: Some(uuid::Uuid::new_v4().to_string()),
            name: Some(name.into()),
            message: None,
            metadata: None,
            creation_date: Some(Utc::now()),
        }
    }

    /// Builder: add message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
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

impl Attributes for State {
    fn attribute_registry() -> &'static AttributeRegistry<Self> {
        static REGISTRY: OnceLock<AttributeRegistry<State>> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            AttributeRegistry::new()
                .with(AttributeDefinition::new(
                    "name",
                    AttributeType::String,
                    |s: &State| s.name.clone().into(),
                    |s: &mut State, v: AttributeValue| {
                        s.name = v.into_optional_string()?;
                        Ok(())
                    },
                ))
                .with(
                    AttributeDefinition::new(
                        "message",
                        AttributeType::String,
                        |s: &State| s.message.clone().into(),
                        |s: &mut State, v: AttributeValue| {
                            s.message = v.into_optional_string()?;
                            Ok(())
                        },
                    )
                    .with_description("Human-readable description of the state"),
                )
                .with(AttributeDefinition::new(
                    "metadata",
                    AttributeType::Json,
                    |s: &State| s.metadata.clone().into(),
                    |s: &mut State, v: AttributeValue| {
                        s.metadata = v.into_optional_json()?;
                        Ok(())
                    },
                ))
                .with(AttributeDefinition::new(
                    "creation_date",
                    AttributeType::DateTime,
                    |s: &State| s.creation_date.into(),
                    |s: &mut State, v: AttributeValue| {
                        s.creation_date = v.into_optional_datetime()?;
                        Ok(())
                    },
                ))
        })
    }
}

impl Entity for State {
    type Id = String;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

impl WithCreationDate for State {
    fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    fn set_creation_date(&mut self, creation_date: Option<DateTime<Utc>>) {
        self.creation_date = creation_date;
    }
}
