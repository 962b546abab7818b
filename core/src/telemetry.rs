use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "greeter_core=info,bootstrap=info";

/// Always appended so the invocation log lines survive a stricter `RUST_LOG`.
const HANDLER_DIRECTIVE: &str = "greeter_core=info";

/// Installs the process-wide subscriber. Call once at start-up.
pub fn init_tracing() {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Builds the filter from `RUST_LOG` (or the default when unset or invalid),
/// keeping `greeter_core` at info or more verbose.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    match HANDLER_DIRECTIVE.parse::<Directive>() {
        Ok(directive) if !keeps_handler_verbose(rust_log) => filter.add_directive(directive),
        _ => filter,
    }
}

/// True when `RUST_LOG` already asks for debug or trace on `greeter_core`.
fn keeps_handler_verbose(rust_log: Option<&str>) -> bool {
    rust_log.is_some_and(|directives| {
        directives.split(',').any(|d| {
            let d = d.trim();
            d == "greeter_core=debug" || d == "greeter_core=trace"
        })
    })
}
