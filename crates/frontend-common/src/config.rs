//! Service locations baked in at build time, with an optional runtime
//! override read from `window.VERA_CONFIG` so a static deployment can be
//! pointed at other services without rebuilding.

use vera_http::{ClientError, ServiceConfig};

/// Authentication constants
pub struct AuthConfig;

impl AuthConfig {
    /// Query parameter the login callback uses to hand over a token
    pub const TOKEN_QUERY_PARAM: &'static str = "access_token";
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub identity_url: String,
    pub drive_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self {
            identity_url: option_env!("VERA_IDENTITY_SERVICE_URL")
                .unwrap_or_default()
                .to_string(),
            drive_url: option_env!("VERA_DRIVE_SERVICE_URL")
                .unwrap_or_default()
                .to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    pub fn service_config(&self) -> Result<ServiceConfig, ClientError> {
        ServiceConfig::new(&self.identity_url, &self.drive_url)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    identity_url: Option<String>,
    drive_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.identity_url {
        config.identity_url = value;
    }
    if let Some(value) = runtime.drive_url {
        config.drive_url = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("VERA_CONFIG")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let object = Object::from(value);

    Some(RuntimeConfig {
        identity_url: read_runtime_value(&object, "identity_url"),
        drive_url: read_runtime_value(&object, "drive_url"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> AppConfig {
        AppConfig {
            identity_url: "https://identity.default".to_string(),
            drive_url: "https://drive.default".to_string(),
        }
    }

    #[test]
    fn blank_runtime_values_are_ignored() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("  "), None);

        let mut config = defaults();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                identity_url: normalize_runtime_value("   "),
                drive_url: None,
            },
        );
        assert_eq!(config, defaults());
    }

    #[test]
    fn runtime_values_override_build_values() {
        let mut config = defaults();
        apply_runtime_overrides(
            &mut config,
            RuntimeConfig {
                identity_url: normalize_runtime_value(" https://id.example.com "),
                drive_url: normalize_runtime_value("https://drive.example.com"),
            },
        );

        assert_eq!(config.identity_url, "https://id.example.com");
        assert_eq!(config.drive_url, "https://drive.example.com");
        assert!(config.service_config().is_ok());
    }

    #[test]
    fn missing_urls_fail_service_config() {
        let config = AppConfig {
            identity_url: String::new(),
            drive_url: "https://drive.example.com".to_string(),
        };
        assert!(matches!(
            config.service_config(),
            Err(ClientError::Configuration(_))
        ));
    }
}
