use rocket::figment::Figment;
use rocket::http::uri::Origin;
use serde::{Deserialize, Serialize};

/// App settings, read from the same figment Rocket uses
/// (`Rocket.toml` + `ROCKET_*` environment variables).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Mount point for the JSON API.
    pub api_base: String,
    /// Allowed browser origin. No CORS headers are sent when unset.
    pub cors_origin: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            api_base: "/api".to_string(),
            cors_origin: None,
        }
    }
}

impl AgentConfig {
    /// Extract settings, falling back to defaults on anything unusable.
    pub fn from_figment(figment: &Figment) -> Self {
        let mut config = match figment.extract::<AgentConfig>() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid agent configuration, using defaults: {}", e);
                return AgentConfig::default();
            }
        };

        match normalize_base(&config.api_base) {
            Some(base) => config.api_base = base,
            None => {
                log::warn!(
                    "api_base {:?} is not a valid mount path, using /api",
                    config.api_base
                );
                config.api_base = AgentConfig::default().api_base;
            }
        }

        config.cors_origin = config
            .cors_origin
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        config
    }
}

/// Leading slash, no trailing slash (except the root itself).
fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let base = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    };
    let base = if base.is_empty() { "/".to_string() } else { base };
    Origin::parse(&base).ok()?;
    if base.contains('?') {
        return None;
    }
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/api"), Some("/api".to_string()));
        assert_eq!(normalize_base("v1/"), Some("/v1".to_string()));
        assert_eq!(normalize_base("/"), Some("/".to_string()));
        assert_eq!(normalize_base(""), Some("/".to_string()));
        assert_eq!(normalize_base("/a?b=1"), None);
    }

    #[test]
    fn test_from_figment_reads_values() {
        let figment = Figment::from(rocket::Config::default())
            .merge(("api_base", "/v2/"))
            .merge(("cors_origin", "https://studio.example"));
        let config = AgentConfig::from_figment(&figment);
        assert_eq!(config.api_base, "/v2");
        assert_eq!(config.cors_origin.as_deref(), Some("https://studio.example"));
    }

    #[test]
    fn test_from_figment_defaults() {
        let config = AgentConfig::from_figment(&Figment::from(rocket::Config::default()));
        assert_eq!(config, AgentConfig::default());
    }
}
