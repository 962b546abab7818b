use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::context::{self, InvocationContext};
use crate::errors::Result;

pub const STATUS_OK: u16 = 200;

/// Decoded form of the response body. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingBody {
    pub message: String,
    pub stage: String,
    pub log_level: String,
    pub function_version: String,
}

impl GreetingBody {
    pub fn new(name: &str, settings: &Settings, context: Option<&InvocationContext>) -> Self {
        Self {
            message: format!("Hello, {}!", name),
            stage: settings.stage.clone(),
            log_level: settings.log_level.clone(),
            function_version: context::function_version(context).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded [`GreetingBody`].
    pub body: String,
}

impl GreetingResponse {
    pub fn ok(body: &GreetingBody) -> Result<Self> {
        Ok(Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn body(&self) -> Result<GreetingBody> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
