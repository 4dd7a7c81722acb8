use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::model::FreightLimits;

/// Complete application configuration, loaded from environment variables or default values.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub freight: FreightConfig,
}

impl AppConfig {
    /// Creates a configuration from the currently available environment variables.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            freight: FreightConfig::from_env(),
        }
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    bind_ip: IpAddr,
    display_host: String,
    port: u16,
}

impl ApiConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    fn from_env() -> Self {
        let host_value =
            env_string("LOADPLAN_API_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let (bind_ip, effective_host) = match host_value.parse::<IpAddr>() {
            Ok(ip) => (ip, host_value),
            Err(err) => {
                eprintln!(
                    "⚠️ Could not parse LOADPLAN_API_HOST ('{}'): {}. Using {}.",
                    host_value,
                    err,
                    Self::DEFAULT_HOST
                );
                (
                    Self::DEFAULT_HOST
                        .parse::<IpAddr>()
                        .expect("Default host must be valid"),
                    Self::DEFAULT_HOST.to_string(),
                )
            }
        };

        let port = match env_string("LOADPLAN_API_PORT") {
            Some(raw) => match raw.parse::<u16>() {
                Ok(value) if value != 0 => value,
                Ok(_) => {
                    eprintln!(
                        "⚠️ LOADPLAN_API_PORT must not be 0. Using {}.",
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
                Err(err) => {
                    eprintln!(
                        "⚠️ Could not parse LOADPLAN_API_PORT ('{}'): {}. Using {}.",
                        raw,
                        err,
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
            },
            None => Self::DEFAULT_PORT,
        };

        Self {
            bind_ip,
            display_host: effective_host,
            port,
        }
    }

    /// Socket address to bind the server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip, self.port)
    }

    /// Visible hostname for logging and hints.
    pub fn display_host(&self) -> &str {
        &self.display_host
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Indicates whether binding to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        match self.bind_ip {
            IpAddr::V4(addr) => addr == Ipv4Addr::UNSPECIFIED,
            IpAddr::V6(addr) => addr == Ipv6Addr::UNSPECIFIED,
        }
    }
}

/// Configuration for road freight limits.
#[derive(Clone, Debug)]
pub struct FreightConfig {
    limits: FreightLimits,
}

impl FreightConfig {
    const ROAD_WEIGHT_VAR: &'static str = "LOADPLAN_ROAD_WEIGHT_LIMIT_KG";
    const DOOR_HEIGHT_VAR: &'static str = "LOADPLAN_DOOR_HEIGHT_CM";

    fn from_env() -> Self {
        let road_weight_limit_kg = load_f64_with_warning(
            Self::ROAD_WEIGHT_VAR,
            FreightLimits::DEFAULT_ROAD_WEIGHT_LIMIT_KG,
            |value| value > 0.0,
            "must be greater than 0",
            "Warning: Adjusted road weight limit may not be street legal",
        );

        let door_height_cm = load_f64_with_warning(
            Self::DOOR_HEIGHT_VAR,
            FreightLimits::DEFAULT_DOOR_HEIGHT_CM,
            |value| value > 0.0,
            "must be greater than 0",
            "Warning: Adjusted door height may not match real container doors",
        );

        Self {
            limits: FreightLimits {
                road_weight_limit_kg,
                door_height_cm,
            },
        }
    }

    /// Returns the configured freight limits.
    pub fn limits(&self) -> FreightLimits {
        self.limits
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            eprintln!(
                "⚠️ Access to {} failed: {}. Using default value.",
                name, err
            );
            None
        }
    }
}

fn load_f64_with_warning(
    var_name: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
    warning: &str,
) -> f64 {
    match env_string(var_name) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => {
                if !validator(value) {
                    eprintln!(
                        "⚠️ {} contains invalid value '{}': {}. Using {}.",
                        var_name, raw, invalid_hint, default
                    );
                    default
                } else {
                    let tolerance = (default.abs().max(1.0)) * 1e-9;
                    if (value - default).abs() > tolerance {
                        println!("⚠️ {} ({} = {}).", warning, var_name, value);
                    }
                    value
                }
            }
            Err(err) => {
                eprintln!(
                    "⚠️ Could not parse {} ('{}') as number: {}. Using {}.",
                    var_name, raw, err, default
                );
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_f64_default_when_unset() {
        let value = load_f64_with_warning(
            "LOADPLAN_TEST_UNSET_VAR",
            19950.0,
            |value| value > 0.0,
            "must be greater than 0",
            "unused",
        );
        assert_eq!(value, 19950.0);
    }

    #[test]
    fn test_default_freight_limits_match_model() {
        let limits = FreightLimits::default();
        assert_eq!(limits.road_weight_limit_kg, 19950.0);
        assert_eq!(limits.door_height_cm, 258.0);
    }
}
