use tracing::info;

use crate::config::Settings;
use crate::context::InvocationContext;
use crate::errors::Result;
use crate::event::GreetingEvent;
use crate::response::{GreetingBody, GreetingResponse};

/// Greets the event's `name` and echoes the deployment settings.
///
/// Logs the event as received and the response about to be returned.
/// The status code is always 200; the only failures are serialization errors,
/// which are left to the caller.
pub fn handle(
    event: &GreetingEvent,
    context: Option<&InvocationContext>,
    settings: &Settings,
) -> Result<GreetingResponse> {
    info!("Received event: {}", serde_json::to_string(event)?);

    let body = GreetingBody::new(&event.name(), settings, context);
    let response = GreetingResponse::ok(&body)?;

    info!("Returning response: {}", serde_json::to_string(&response)?);
    Ok(response)
}
