mod allowed_headers;
mod allowed_methods;
pub mod config;
pub mod constants;
mod context;
mod cors;
pub mod handler;
mod headers;
pub mod logging;
mod options;
mod origin;
mod result;
pub mod server;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{Cli, ConfigError, FileConfig, ServerConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use handler::{GreetingService, respond};
pub use headers::Headers;
pub use logging::LogFormat;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowList, OriginMatcher, PatternError};
pub use result::CorsDecision;
pub use server::{Server, ServerError};
