use crate::error::ConfigError;
use std::{
    collections::HashMap,
    fs,
    io::{ErrorKind, Write},
    path::Path,
};

pub const TOKEN_KEY: &str = "X-QuakeToken";
pub const SIZE_KEY: &str = "size";
const DEFAULT_SIZE: &str = "10";
const TEMPLATE: &str = "X-QuakeToken: your_token_here\nsize: 10\n";

/// Key/value settings read from the local config file.
#[derive(Debug, Clone)]
pub struct Configuration {
    entries: HashMap<String, String>,
}

impl Configuration {
    /// Reads `path`, or writes a template there and fails with
    /// [`ConfigError::Missing`] if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Self::write_template(path)?;
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };

        log::debug!("Loaded config from {}", path.display());
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn token(&self) -> Result<&str, ConfigError> {
        self.get(TOKEN_KEY).ok_or(ConfigError::MissingKey(TOKEN_KEY))
    }

    /// Raw size limit; not validated here.
    pub fn size(&self) -> &str {
        self.get(SIZE_KEY).unwrap_or(DEFAULT_SIZE)
    }

    fn write_template(path: &Path) -> Result<(), ConfigError> {
        let mut file = fs::File::create(path)?;
        file.write_all(TEMPLATE.as_bytes())?;
        log::debug!("Wrote config template to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_trimmed_keys_and_values() {
        let config = Configuration::parse("  X-QuakeToken :  abc-123 \nsize:20\n");
        assert_eq!(config.token().unwrap(), "abc-123");
        assert_eq!(config.size(), "20");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let config = Configuration::parse("proxy: http://127.0.0.1:8080\n");
        assert_eq!(config.get("proxy"), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn ignores_lines_without_separator() {
        let config = Configuration::parse("\njunk line\nsize: 5\n");
        assert_eq!(config.get("junk line"), None);
        assert_eq!(config.size(), "5");
    }

    #[test]
    fn missing_token_is_an_error() {
        let config = Configuration::parse("size: 5\n");
        assert!(matches!(
            config.token(),
            Err(ConfigError::MissingKey(TOKEN_KEY))
        ));
    }

    #[test]
    fn loads_existing_file() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("quake.conf");
        fs::write(&path, "X-QuakeToken: secret\nsize: 50\n").unwrap();

        let config = Configuration::load(&path).expect("config should load");
        assert_eq!(config.token().unwrap(), "secret");
        assert_eq!(config.size(), "50");
    }

    #[test]
    fn missing_file_writes_template() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("quake.conf");

        let err = Configuration::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref p) if p == &path));

        let template = fs::read_to_string(&path).unwrap();
        assert_eq!(template.lines().count(), 2);
        let config = Configuration::parse(&template);
        assert_eq!(config.token().unwrap(), "your_token_here");
        assert_eq!(config.size(), "10");
    }
}
