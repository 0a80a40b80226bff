//! Configuration loading and listen address resolution

use crate::{Error, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Compiled default listen port for tpf-ui
pub const DEFAULT_PORT: u16 = 5760;

/// Listen address resolution following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`listen` key)
/// 4. Compiled default (fallback)
pub fn resolve_listen_addr(cli_arg: Option<&str>, env_var_name: &str) -> Result<SocketAddr> {
    // Priority 1: Command-line argument
    if let Some(addr) = cli_arg {
        tracing::debug!("Listen address from command line: {}", addr);
        return parse_listen_addr(addr);
    }

    // Priority 2: Environment variable
    if let Ok(addr) = std::env::var(env_var_name) {
        tracing::debug!("Listen address from {}: {}", env_var_name, addr);
        return parse_listen_addr(&addr);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = load_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(listen) = config.get("listen").and_then(|v| v.as_str()) {
                    tracing::debug!(
                        "Listen address from {}: {}",
                        config_path.display(),
                        listen
                    );
                    return parse_listen_addr(listen);
                }
            }
        }
    }

    // Priority 4: Compiled default
    Ok(SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)))
}

/// Parse a `host:port` string into a socket address
pub fn parse_listen_addr(addr: &str) -> Result<SocketAddr> {
    addr.parse()
        .map_err(|_| Error::Config(format!("Invalid listen address: {}", addr)))
}

/// Get configuration file path for the platform
fn load_config_file() -> Result<PathBuf> {
    let config_path = if cfg!(target_os = "linux") {
        // Try ~/.config/tpf/config.toml first, then /etc/tpf/config.toml
        let user_config = dirs::config_dir().map(|d| d.join("tpf").join("config.toml"));
        let system_config = PathBuf::from("/etc/tpf/config.toml");

        if let Some(path) = user_config {
            if path.exists() {
                return Ok(path);
            }
        }
        if system_config.exists() {
            return Ok(system_config);
        }
        return Err(Error::Config("No config file found".to_string()));
    } else {
        dirs::config_dir()
            .map(|d| d.join("tpf").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?
    };

    if config_path.exists() {
        Ok(config_path)
    } else {
        Err(Error::Config(format!(
            "Config file not found: {:?}",
            config_path
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_listen_addr_valid() {
        let addr = parse_listen_addr("127.0.0.1:5760").unwrap();
        assert_eq!(addr.port(), 5760);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_parse_listen_addr_invalid() {
        assert!(parse_listen_addr("not-an-address").is_err());
        assert!(parse_listen_addr("127.0.0.1").is_err()); // missing port
        assert!(parse_listen_addr("127.0.0.1:99999").is_err()); // port out of range
    }

    #[test]
    #[serial]
    fn test_cli_arg_takes_priority() {
        std::env::set_var("TPF_TEST_LISTEN_A", "127.0.0.1:6001");
        let addr = resolve_listen_addr(Some("127.0.0.1:6000"), "TPF_TEST_LISTEN_A").unwrap();
        assert_eq!(addr.port(), 6000);
        std::env::remove_var("TPF_TEST_LISTEN_A");
    }

    #[test]
    #[serial]
    fn test_env_var_used_when_no_cli_arg() {
        std::env::set_var("TPF_TEST_LISTEN_B", "127.0.0.1:6002");
        let addr = resolve_listen_addr(None, "TPF_TEST_LISTEN_B").unwrap();
        assert_eq!(addr.port(), 6002);
        std::env::remove_var("TPF_TEST_LISTEN_B");
    }

    #[test]
    #[serial]
    fn test_default_when_nothing_configured() {
        std::env::remove_var("TPF_TEST_LISTEN_C");
        let addr = resolve_listen_addr(None, "TPF_TEST_LISTEN_C").unwrap();
        assert_eq!(addr.port(), DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_invalid_cli_arg_is_error() {
        assert!(resolve_listen_addr(Some("bogus"), "TPF_TEST_LISTEN_D").is_err());
    }
}
