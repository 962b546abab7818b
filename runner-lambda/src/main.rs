use anyhow::Context as _;
use greeter_core::telemetry::init_tracing;
use greeter_core::{GreetingEvent, GreetingResponse, InvocationContext, Settings};
use lambda_runtime::{service_fn, Context, Error, LambdaEvent};
use serde_json::Value;
use std::env;
use tokio::io::AsyncReadExt;
use tracing::info;

/// Maps the platform context onto the handler's view of it.
/// An empty function version counts as no context at all.
fn invocation_context(context: &Context) -> Option<InvocationContext> {
    let version = &context.env_config.version;
    if version.is_empty() {
        None
    } else {
        Some(InvocationContext::new(version.clone()))
    }
}

fn invoke(
    payload: Value,
    context: Option<&InvocationContext>,
    settings: &Settings,
) -> Result<GreetingResponse, Error> {
    let event = GreetingEvent::from_value(payload)?;
    Ok(greeter_core::handle(&event, context, settings)?)
}

async fn function_handler(event: LambdaEvent<Value>) -> Result<GreetingResponse, Error> {
    let (payload, context) = event.into_parts();
    let settings = Settings::from_env();
    invoke(payload, invocation_context(&context).as_ref(), &settings)
}

/// Runs one invocation outside Lambda: event JSON on stdin, response JSON on stdout.
async fn run_local() -> anyhow::Result<()> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read event from stdin")?;

    let payload = if input.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(&input).context("Event on stdin is not valid JSON")?
    };

    let settings = Settings::from_env();
    let response = invoke(payload, None, &settings)
        .map_err(|e| anyhow::anyhow!("Invocation failed: {}", e))?;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Running in AWS Lambda environment");
        lambda_runtime::run(service_fn(function_handler)).await
    } else {
        info!("Running in local development mode");
        run_local().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_core::GreetingBody;
    use lambda_runtime::Config;
    use serde_json::json;
    use std::sync::Arc;

    fn context_with_version(version: &str) -> Context {
        let mut config = Config::default();
        config.version = version.to_string();
        let mut context = Context::default();
        context.env_config = Arc::new(config);
        context
    }

    #[test]
    fn test_invocation_context_from_platform() {
        let ctx = invocation_context(&context_with_version("3")).unwrap();
        assert_eq!(ctx.function_version, "3");
    }

    #[test]
    fn test_empty_platform_version_is_absent() {
        assert!(invocation_context(&Context::default()).is_none());
    }

    #[test]
    fn test_invoke_scenario() {
        let ctx = InvocationContext::new("3");
        let response = invoke(json!({"name": "Ada"}), Some(&ctx), &Settings::default()).unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body().unwrap(),
            GreetingBody {
                message: "Hello, Ada!".to_string(),
                stage: "development".to_string(),
                log_level: "INFO".to_string(),
                function_version: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_rejects_non_object_event() {
        let err = invoke(json!("Ada"), None, &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[tokio::test]
    async fn test_function_handler_without_version() {
        let event = LambdaEvent::new(json!({}), Context::default());
        let response = function_handler(event).await.unwrap();
        let body = response.body().unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(body.message, "Hello, World!");
        assert_eq!(body.function_version, "unknown");
    }

    #[tokio::test]
    async fn test_function_handler_with_version() {
        let event = LambdaEvent::new(json!({"name": "Ada"}), context_with_version("7"));
        let response = function_handler(event).await.unwrap();
        let body = response.body().unwrap();

        assert_eq!(body.message, "Hello, Ada!");
        assert_eq!(body.function_version, "7");
    }
}
