pub const UNKNOWN_VERSION: &str = "unknown";

/// Platform metadata about the current invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub function_version: String,
}

impl InvocationContext {
    pub fn new(function_version: impl Into<String>) -> Self {
        Self {
            function_version: function_version.into(),
        }
    }
}

pub fn function_version(context: Option<&InvocationContext>) -> &str {
    context
        .map(|ctx| ctx.function_version.as_str())
        .unwrap_or(UNKNOWN_VERSION)
}
