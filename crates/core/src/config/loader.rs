use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with `SHOWSTORE_`-prefixed environment
/// variable overrides. Sections are separated by a double underscore so field
/// names keep theirs: `SHOWSTORE_SERVER__PORT=9000`,
/// `SHOWSTORE_CATALOG__TVMAZE__TIMEOUT_SECS=5`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("SHOWSTORE_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from a TOML string
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.key, "showstore_favorites_v1");
        assert_eq!(config.catalog.tvmaze.base_url(), "https://api.tvmaze.com");
    }

    #[test]
    fn test_load_config_from_str_sections() {
        let toml = r#"
[server]
port = 9000

[storage]
path = "/var/lib/showstore/favorites.db"
key = "favs"

[catalog.tvmaze]
base_url = "http://localhost:9999/"
timeout_secs = 5
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.storage.key, "favs");
        assert_eq!(
            config.storage.path.to_str(),
            Some("/var/lib/showstore/favorites.db")
        );
        assert_eq!(config.catalog.tvmaze.base_url(), "http://localhost:9999");
        assert_eq!(config.catalog.tvmaze.timeout_secs(), 5);
    }

    #[test]
    fn test_load_config_from_str_bad_type() {
        let result = load_config_from_str("[server]\nport = \"eighty\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_env_overrides_nested_fields() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
[server]
port = 3000

[catalog.tvmaze]
timeout_secs = 10
"#,
            )?;
            jail.set_env("SHOWSTORE_SERVER__PORT", "9000");
            jail.set_env("SHOWSTORE_STORAGE__KEY", "favs_from_env");
            jail.set_env("SHOWSTORE_CATALOG__TVMAZE__BASE_URL", "http://localhost:1234");
            jail.set_env("SHOWSTORE_CATALOG__TVMAZE__TIMEOUT_SECS", "5");
            // Process-level variables that are not config keys.
            jail.set_env("SHOWSTORE_CONFIG", "config.toml");
            jail.set_env("SHOWSTORE_WEB_DIR", "web/dist");

            let config = load_config(Path::new("config.toml")).unwrap();
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.storage.key, "favs_from_env");
            assert_eq!(config.catalog.tvmaze.base_url(), "http://localhost:1234");
            assert_eq!(config.catalog.tvmaze.timeout_secs(), 5);
            Ok(())
        });
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[server]
host = "127.0.0.1"
port = 3000
"#
        )
        .unwrap();

        // Inside a jail so overrides set by other tests cannot leak in.
        figment::Jail::expect_with(|_jail| {
            let config = load_config(temp_file.path()).unwrap();
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.server.host.to_string(), "127.0.0.1");
            Ok(())
        });
    }
}
