use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize, Debug, Default)]
pub struct Configuration {
    pub port: Option<u16>,
}

impl Configuration {
    /// Reads the optional configuration file. A missing file yields the
    /// defaults; an unreadable or malformed one is a startup error.
    pub async fn load(path: &str) -> Result<Self, ConfigurationError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default())
            }
            Err(error) => return Err(error.into()),
        };

        Ok(toml::from_str(&raw)?)
    }

    /// PORT environment variable, then the configuration file, then 3000.
    /// An unset or unparseable PORT falls through to the next layer.
    pub fn resolved_port(&self) -> u16 {
        env_port().or(self.port).unwrap_or(DEFAULT_PORT)
    }
}

fn env_port() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|raw| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::{Configuration, DEFAULT_PORT};

    // Single test so the PORT manipulations never race each other
    #[test]
    fn port_resolution_layers() {
        std::env::remove_var("PORT");

        let no_file = Configuration::default();
        assert_eq!(no_file.resolved_port(), DEFAULT_PORT);

        let from_file = Configuration { port: Some(8123) };
        assert_eq!(from_file.resolved_port(), 8123);

        std::env::set_var("PORT", "4567");
        assert_eq!(no_file.resolved_port(), 4567);
        assert_eq!(from_file.resolved_port(), 4567);

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(no_file.resolved_port(), DEFAULT_PORT);
        assert_eq!(from_file.resolved_port(), 8123);

        std::env::remove_var("PORT");
    }

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let configuration = Configuration::load("does-not-exist.toml").await.unwrap();
        assert_eq!(configuration.port, None);
    }

    #[test]
    fn file_port_deserializes() {
        let configuration: Configuration = toml::from_str("port = 8123").unwrap();
        assert_eq!(configuration.port, Some(8123));

        assert!(toml::from_str::<Configuration>("port = \"eighty\"").is_err());
    }
}
