//! Configuration management for session authentication
//!
//! Loads the process-wide password salt and the user-facing guard messages.
//! Every process sharing a user store must be started with the same salt, or
//! credentials stored by one instance will not verify on another.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::AuthError;
use crate::middleware::guard::GuardMessages;

/// Config file looked up (optionally) by [`AuthConfig::load`]
const CONFIG_FILE: &str = "auth";

/// Environment prefix, e.g. `SESSION_AUTH_PASSWORD_SALT`
const ENV_PREFIX: &str = "SESSION_AUTH";

/// Legacy salt variable, consulted only when nothing else supplies a salt
const LEGACY_SALT_VAR: &str = "PWD_SALT";

const DEFAULT_REDIRECT_PATH: &str = "/";
const DEFAULT_LOGIN_REQUIRED_MESSAGE: &str = "Access is restricted to signed-in users.";
const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Unauthorized access attempt!";

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret prefixed to every password before hashing (restart required)
    pub password_salt: String,

    /// Where denied requests are sent
    pub redirect_path: String,

    /// Flash message for requests without a session principal
    pub login_required_message: String,

    /// Flash message for principals lacking a permitted role
    pub unauthorized_message: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password_salt", &"<redacted>")
            .field("redirect_path", &self.redirect_path)
            .field("login_required_message", &self.login_required_message)
            .field("unauthorized_message", &self.unauthorized_message)
            .finish()
    }
}

impl AuthConfig {
    /// Load configuration from an optional `auth.toml` with environment overrides
    pub fn load() -> Result<Self, AuthError> {
        Self::build(None, None)
    }

    /// Load configuration from the given file with environment overrides.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, AuthError> {
        Self::build(Some(path), None)
    }

    /// Configuration with the given salt and default messages
    pub fn with_salt(salt: impl Into<String>) -> Self {
        Self {
            password_salt: salt.into(),
            redirect_path: DEFAULT_REDIRECT_PATH.to_string(),
            login_required_message: DEFAULT_LOGIN_REQUIRED_MESSAGE.to_string(),
            unauthorized_message: DEFAULT_UNAUTHORIZED_MESSAGE.to_string(),
        }
    }

    /// The message/redirect pairs rendered for denied requests
    pub fn guard_messages(&self) -> GuardMessages {
        GuardMessages {
            login_required: self.login_required_message.clone(),
            unauthorized: self.unauthorized_message.clone(),
            redirect_to: self.redirect_path.clone(),
        }
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.password_salt.is_empty() {
            return Err(config::ConfigError::Message(
                "password_salt cannot be empty".into(),
            ));
        }

        if !self.redirect_path.starts_with('/') {
            return Err(config::ConfigError::Message(
                "redirect_path must start with '/'".into(),
            ));
        }

        Ok(())
    }

    /// Layers defaults, legacy salt, file and prefixed environment, lowest first.
    /// `vars` replaces the process environment when given.
    fn build(
        path: Option<&Path>,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, AuthError> {
        let legacy_salt = match &vars {
            Some(vars) => vars.get(LEGACY_SALT_VAR).cloned(),
            None => std::env::var(LEGACY_SALT_VAR).ok(),
        };

        let mut builder = Config::builder()
            .set_default("redirect_path", DEFAULT_REDIRECT_PATH)?
            .set_default("login_required_message", DEFAULT_LOGIN_REQUIRED_MESSAGE)?
            .set_default("unauthorized_message", DEFAULT_UNAUTHORIZED_MESSAGE)?;

        if let Some(salt) = legacy_salt {
            builder = builder.set_default("password_salt", salt)?;
        }

        let file = match path {
            Some(path) => File::from(path),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let settings = builder
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?;
        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, AuthError> {
        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_file_applies_defaults() {
        let file = write_config("password_salt = \"pepper\"\n");
        let config = AuthConfig::load_from(file.path()).unwrap();

        assert_eq!(config.password_salt, "pepper");
        assert_eq!(config.redirect_path, "/");
        assert_eq!(config.unauthorized_message, DEFAULT_UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn test_load_from_file_overrides_messages() {
        let file = write_config(
            "password_salt = \"pepper\"\n\
             redirect_path = \"/login\"\n\
             login_required_message = \"Please sign in\"\n",
        );
        let config = AuthConfig::load_from(file.path()).unwrap();

        assert_eq!(config.redirect_path, "/login");
        assert_eq!(config.login_required_message, "Please sign in");
    }

    #[test]
    fn test_empty_salt_is_rejected() {
        let file = write_config("password_salt = \"\"\n");
        let err = AuthConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }

    #[test]
    fn test_relative_redirect_is_rejected() {
        let mut config = AuthConfig::with_salt("pepper");
        config.redirect_path = "home".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AuthConfig::load_from(Path::new("/nonexistent/auth.toml")).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_legacy_salt_alone() {
        let config = AuthConfig::build(None, Some(vars(&[("PWD_SALT", "legacy")]))).unwrap();
        assert_eq!(config.password_salt, "legacy");
    }

    #[test]
    fn test_prefixed_env_overrides_legacy_salt() {
        let env = vars(&[
            ("PWD_SALT", "legacy"),
            ("SESSION_AUTH_PASSWORD_SALT", "prefixed"),
            ("SESSION_AUTH_REDIRECT_PATH", "/home"),
        ]);
        let config = AuthConfig::build(None, Some(env)).unwrap();
        assert_eq!(config.password_salt, "prefixed");
        assert_eq!(config.redirect_path, "/home");
    }

    #[test]
    fn test_file_overrides_legacy_salt() {
        let file = write_config("password_salt = \"from-file\"\n");
        let config =
            AuthConfig::build(Some(file.path()), Some(vars(&[("PWD_SALT", "legacy")]))).unwrap();
        assert_eq!(config.password_salt, "from-file");
    }

    #[test]
    fn test_prefixed_env_overrides_file() {
        let file = write_config("password_salt = \"from-file\"\n");
        let env = vars(&[("SESSION_AUTH_PASSWORD_SALT", "prefixed")]);
        let config = AuthConfig::build(Some(file.path()), Some(env)).unwrap();
        assert_eq!(config.password_salt, "prefixed");
    }

    #[test]
    fn test_no_salt_source_is_an_error() {
        let err = AuthConfig::build(None, Some(HashMap::new())).unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_salt() {
        let config = AuthConfig::with_salt("pepper");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("pepper"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_guard_messages_follow_config() {
        let config = AuthConfig::with_salt("pepper");
        let messages = config.guard_messages();
        assert_eq!(messages.redirect_to, "/");
        assert_eq!(messages.unauthorized, DEFAULT_UNAUTHORIZED_MESSAGE);
        assert_eq!(messages.login_required, DEFAULT_LOGIN_REQUIRED_MESSAGE);
    }
}
