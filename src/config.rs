//! Application Configuration
//!
//! Explicit configuration object built once at startup and provided to the
//! view layer via context. No module-level mutable globals.

/// Feature toggles controlling which admin pages are reachable
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Features {
    /// User management is only exposed on development hosts
    pub user_management: bool,
    pub email_testing: bool,
}

/// App-wide configuration: API origin plus feature flags
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL prefixed to every relative API path
    pub api_url: String,
    pub features: Features,
}

const PRODUCTION_API_URL: &str = "https://clinic-backend-production-8835.up.railway.app";

impl AppConfig {
    /// Select configuration from the page's hostname
    pub fn for_host(hostname: &str) -> Self {
        let dev = hostname == "localhost" || hostname == "127.0.0.1";
        Self {
            api_url: PRODUCTION_API_URL.to_string(),
            features: Features {
                user_management: dev,
                email_testing: true,
            },
        }
    }

    /// Read the hostname from the browser and build the config
    pub fn from_window() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self::for_host(&hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_host_enables_user_management() {
        let config = AppConfig::for_host("localhost");
        assert!(config.features.user_management);
        assert!(config.features.email_testing);
    }

    #[test]
    fn test_production_host_hides_user_management() {
        let config = AppConfig::for_host("clinic.ucc.edu.ph");
        assert!(!config.features.user_management);
        assert!(config.features.email_testing);
        assert!(config.api_url.starts_with("https://"));
    }
}
