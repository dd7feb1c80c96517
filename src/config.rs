use std::env;

/// Deployment mode, read from `APP_ENV`.
///
/// Anything other than `development` is treated as production so that the
/// SSRF protections default to their strict form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

pub struct Config {
    pub port: u16,
    pub mode: RuntimeMode,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = if matches!(env::var("APP_ENV").as_deref(), Ok("development")) {
            RuntimeMode::Development
        } else {
            RuntimeMode::Production
        };

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            mode,
        }
    }

    /// Localhost and private-range targets are only reachable in development.
    pub fn allow_localhost(&self) -> bool {
        self.mode == RuntimeMode::Development
    }
}
