pub mod config;
pub mod context;
pub mod errors;
pub mod event;
pub mod handler;
pub mod response;
pub mod telemetry;

pub use config::Settings;
pub use context::InvocationContext;
pub use errors::{HandlerError, Result};
pub use event::GreetingEvent;
pub use handler::handle;
pub use response::{GreetingBody, GreetingResponse};
