//! # Service endpoints — [`ApiConfig`]
//!
//! The platform exposes its admin surface through a handful of separately
//! deployed services. The config holds one base URL per service boundary:
//!
//! | Field | Service | Development default |
//! |-------|---------|---------------------|
//! | `auth_base` | user login/registration | `http://localhost:8080` |
//! | `admin_base` | users, restaurants, orders, transactions, templates | `http://localhost:8084` |
//! | `notify_base` | notification sending | `http://localhost:8086` |
//! | `geocode_base` | forward geocoding | `https://nominatim.openstreetmap.org` |
//!
//! All fields default individually, so a partial config deserialises into
//! the development layout.

use serde::{Deserialize, Serialize};

/// Base URLs of the backend services, without trailing slashes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_auth_base")]
    pub auth_base: String,
    #[serde(default = "default_admin_base")]
    pub admin_base: String,
    #[serde(default = "default_notify_base")]
    pub notify_base: String,
    #[serde(default = "default_geocode_base")]
    pub geocode_base: String,
}

fn default_auth_base() -> String {
    "http://localhost:8080".to_string()
}

fn default_admin_base() -> String {
    "http://localhost:8084".to_string()
}

fn default_notify_base() -> String {
    "http://localhost:8086".to_string()
}

fn default_geocode_base() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base: default_auth_base(),
            admin_base: default_admin_base(),
            notify_base: default_notify_base(),
            geocode_base: default_geocode_base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"admin_base": "https://admin.example.com"}"#).unwrap();
        assert_eq!(config.admin_base, "https://admin.example.com");
        assert_eq!(config.auth_base, "http://localhost:8080");
        assert_eq!(config.geocode_base, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
