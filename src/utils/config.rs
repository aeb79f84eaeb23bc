use std::env;
use std::time::Duration;

/// Base URL used when `SHOREWATCH_ENV=production` and no override is set.
const PRODUCTION_API_URL: &str = "http://15.165.30.16:8080/api";

/// Base URL for every non-production environment.
const LOCAL_API_URL: &str = "http://localhost:8080/api";

/// Fixed transport timeout. Requests exceeding it fail with a timeout error.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Production (`SHOREWATCH_ENV=production`) uses `SHOREWATCH_API_URL`
    /// with a fixed default address; any other mode talks to localhost.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let production = env::var("SHOREWATCH_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        let base_url = if production {
            env::var("SHOREWATCH_API_URL").unwrap_or_else(|_| PRODUCTION_API_URL.to_string())
        } else {
            LOCAL_API_URL.to_string()
        };

        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the transport timeout. Mainly for tests; production callers
    /// keep the fixed default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
