pub mod config;
pub mod extract;
pub mod html;
pub mod layers;
pub mod logging;
pub mod middleware;
pub mod shutdown;

pub use config::{load_layered, CorsConfig, LoggingConfig, ServerConfig};
pub use extract::{Payload, PayloadRejection};
pub use layers::{cors_layer, with_common_layers};
pub use logging::init_logging;
pub use shutdown::shutdown_signal;
