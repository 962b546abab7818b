use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::errors::{HandlerError, Result};

pub const DEFAULT_NAME: &str = "World";

/// An event delivered by the platform. Only `name` is interpreted; every other
/// field is carried along untouched, in its original key order, so the event
/// can be logged as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct GreetingEvent {
    fields: Map<String, Value>,
}

impl GreetingEvent {
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(HandlerError::event_not_object(&other)),
        }
    }

    /// The name to greet. A missing key falls back to `"World"`, strings are
    /// used as-is and anything else (`null` included) is rendered as compact JSON.
    pub fn name(&self) -> Cow<'_, str> {
        match self.fields.get("name") {
            None => Cow::Borrowed(DEFAULT_NAME),
            Some(Value::String(name)) => Cow::Borrowed(name.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
