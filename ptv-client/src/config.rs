//! Client configuration and API credentials.

use std::collections::HashMap;
use std::env::VarError;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

/// Default origin for the PTV Timetable API.
pub const DEFAULT_BASE_URL: &str = "https://timetableapi.ptv.vic.gov.au";

/// Environment variable holding the developer ID.
pub const API_ID_VAR: &str = "PTV_API_ID";

/// Environment variable holding the signing key.
pub const API_KEY_VAR: &str = "PTV_API_KEY";

/// Optional environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_VAR: &str = "PTV_API_BASE_URL";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required configuration: {0}")]
    Missing(&'static str),

    /// A variable is set but is not valid Unicode
    #[error("configuration value is not valid Unicode: {0}")]
    NotUnicode(&'static str),

    /// A `.env` file exists but could not be read or parsed
    #[error("failed to load .env file: {0}")]
    Dotenv(String),
}

/// Load a `.env` file from the working directory or one of its parents
/// into the process environment.
///
/// Returns the path loaded, or `None` when there is no such file.
/// Variables already set in the environment are not overwritten.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::Dotenv(e.to_string())),
    }
}

/// PTV API credentials: a developer ID and the key used to sign requests.
///
/// Constructed once at startup and handed to the client; never mutated.
/// The key is redacted from `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    identifier: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from a developer ID and signing key.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Load credentials from `PTV_API_ID` and `PTV_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Load credentials from a `.env` style file, ignoring the process
    /// environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let vars = dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<Result<HashMap<_, _>, _>>())
            .map_err(|e| ConfigError::Dotenv(e.to_string()))?;
        Self::from_lookup(|name| vars.get(name).cloned().ok_or(VarError::NotPresent))
    }

    /// Load credentials through a variable lookup function.
    ///
    /// Both variables must be present and non-empty; there is no fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let identifier = required(&lookup, API_ID_VAR)?;
        let secret = required(&lookup, API_KEY_VAR)?;
        Ok(Self::new(identifier, secret))
    }

    /// The developer ID sent as `devid`.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub(crate) fn secret(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&'static str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(VarError::NotPresent) => Err(ConfigError::Missing(name)),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
    }
}

/// Configuration for the PTV client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the signed path is appended to (scheme and host, no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load the config, honouring `PTV_API_BASE_URL` if it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Load the config through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        let config = Self::new();
        match lookup(BASE_URL_VAR) {
            Ok(url) if !url.is_empty() => Ok(config.with_base_url(url)),
            Ok(_) | Err(VarError::NotPresent) => Ok(config),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(BASE_URL_VAR)),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::ffi::OsString;
    use std::io::Write;

    use super::*;

    fn lookup_from(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, VarError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn credentials_from_lookup() {
        let creds =
            Credentials::from_lookup(lookup_from(&[(API_ID_VAR, "1234567"), (API_KEY_VAR, "s3cret")]))
                .unwrap();
        assert_eq!(creds.identifier(), "1234567");
        assert_eq!(creds.secret(), b"s3cret");
    }

    #[test]
    fn missing_identifier() {
        let err = Credentials::from_lookup(lookup_from(&[(API_KEY_VAR, "s3cret")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_ID_VAR));
    }

    #[test]
    fn missing_key() {
        let err = Credentials::from_lookup(lookup_from(&[(API_ID_VAR, "1234567")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_KEY_VAR));
    }

    #[test]
    fn empty_value_is_missing() {
        let err =
            Credentials::from_lookup(lookup_from(&[(API_ID_VAR, ""), (API_KEY_VAR, "s3cret")]))
                .unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_ID_VAR));
    }

    #[test]
    fn not_unicode() {
        let err = Credentials::from_lookup(|name| match name {
            API_ID_VAR => Ok("1234567".to_string()),
            _ => Err(VarError::NotUnicode(OsString::from("x"))),
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::NotUnicode(API_KEY_VAR));
    }

    #[test]
    fn credentials_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# PTV developer credentials").unwrap();
        writeln!(file, "PTV_API_ID=1234567").unwrap();
        writeln!(file, "PTV_API_KEY=\"s3cret\"").unwrap();

        let creds = Credentials::from_env_file(file.path()).unwrap();
        assert_eq!(creds.identifier(), "1234567");
        assert_eq!(creds.secret(), b"s3cret");
    }

    #[test]
    fn env_file_missing_key() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "PTV_API_ID=1234567").unwrap();

        let err = Credentials::from_env_file(file.path()).unwrap_err();
        assert_eq!(err, ConfigError::Missing(API_KEY_VAR));
    }

    #[test]
    fn env_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::from_env_file(dir.path().join(".env")).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv(_)));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("1234567", "s3cret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("1234567"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ConfigError::Missing(API_KEY_VAR).to_string(),
            "missing required configuration: PTV_API_KEY"
        );
    }

    #[test]
    fn config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080/")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_base_url_override() {
        let config =
            ClientConfig::from_lookup(lookup_from(&[(BASE_URL_VAR, "http://127.0.0.1:9000")]))
                .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");

        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
