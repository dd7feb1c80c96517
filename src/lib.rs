pub mod config;
pub mod error;
pub mod forward;
pub mod routes;
pub mod validation;

pub use config::Config;
pub use forward::{forward, ForwardResult, ReqwestTransport, Transport};
pub use validation::{validate_payload, RequestPayload, ValidationResult, ValidatorConfig};

use std::sync::Arc;

/// Shared state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: ValidatorConfig,
    pub transport: Arc<dyn Transport>,
}

impl AppState {
    pub fn new(validator: ValidatorConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            validator,
            transport,
        }
    }
}
