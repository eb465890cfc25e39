//! Application configuration module
//!
//! Provides the server configuration and its builder. Values are read from
//! the process environment (optionally seeded from a `.env` file by the
//! binary) through [`ServerConfig::from_env`], or from any key lookup through
//! [`ServerConfig::from_lookup`].

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default database name
pub const DEFAULT_DATABASE: &str = "MVDB";

/// Default bound on a single store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on the initial store connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default Cloudinary API base
pub const DEFAULT_UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1";

/// Digest used to sign upload requests
///
/// Must match the signature algorithm configured on the Cloudinary account,
/// which is SHA-1 unless changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl FromStr for SignatureAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            _ => Err(ConfigError::InvalidSignatureAlgorithm(s.to_string())),
        }
    }
}

/// Credentials for the image hosting service
#[derive(Clone, PartialEq, Eq)]
pub struct ImageHostConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// API base, without the cloud name
    pub upload_url: String,
    pub signature_algorithm: SignatureAlgorithm,
}

impl fmt::Debug for ImageHostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHostConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("upload_url", &self.upload_url)
            .field("signature_algorithm", &self.signature_algorithm)
            .finish()
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Document store connection string
    pub mongodb_uri: String,
    /// Database holding the record collections
    pub database_name: String,
    /// Listen port
    pub port: u16,
    /// Bound on every store call
    pub store_timeout: Duration,
    /// Bound on connecting to and pinging the store at startup
    pub connect_timeout: Duration,
    /// Image hosting credentials; uploads are disabled when `None`
    pub image_host: Option<ImageHostConfig>,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a key
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();

        if let Some(uri) = get("MONGODB_URI") {
            builder = builder.mongodb_uri(uri);
        }
        if let Some(name) = get("MONGODB_DATABASE") {
            builder = builder.database_name(name);
        }
        if let Some(port) = get("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber { key: "PORT", value: port })?;
            builder = builder.port(port);
        }
        if let Some(secs) = get("STORE_TIMEOUT_SECS") {
            builder = builder.store_timeout(parse_secs("STORE_TIMEOUT_SECS", secs)?);
        }
        if let Some(secs) = get("STORE_CONNECT_TIMEOUT_SECS") {
            builder = builder.connect_timeout(parse_secs("STORE_CONNECT_TIMEOUT_SECS", secs)?);
        }

        let credentials = [
            get("CLOUDINARY_CLOUD_NAME"),
            get("CLOUDINARY_API_KEY"),
            get("CLOUDINARY_API_SECRET"),
        ];
        match credentials {
            [Some(cloud_name), Some(api_key), Some(api_secret)] => {
                let signature_algorithm = match get("CLOUDINARY_SIGNATURE_ALGORITHM") {
                    Some(name) => name.parse()?,
                    None => SignatureAlgorithm::default(),
                };
                builder = builder.image_host(ImageHostConfig {
                    cloud_name,
                    api_key,
                    api_secret,
                    upload_url: get("CLOUDINARY_UPLOAD_URL")
                        .unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
                    signature_algorithm,
                });
            }
            [None, None, None] => {}
            _ => return Err(ConfigError::PartialImageHost),
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mongodb_uri.starts_with("mongodb://") && !self.mongodb_uri.starts_with("mongodb+srv://") {
            return Err(ConfigError::InvalidUrl(self.mongodb_uri.clone()));
        }
        if self.store_timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn parse_secs(key: &'static str, value: String) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidNumber { key, value })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    mongodb_uri: Option<String>,
    database_name: Option<String>,
    port: Option<u16>,
    store_timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    image_host: Option<ImageHostConfig>,
}

impl ServerConfigBuilder {
    /// Set the document store connection string
    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }

    /// Set the database name
    pub fn database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the per-call store timeout
    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    /// Set the startup connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable image uploads with these credentials
    pub fn image_host(mut self, image_host: ImageHostConfig) -> Self {
        self.image_host = Some(image_host);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            mongodb_uri: self.mongodb_uri.ok_or(ConfigError::MissingValue("MONGODB_URI"))?,
            database_name: self.database_name.unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            store_timeout: self.store_timeout.unwrap_or(DEFAULT_STORE_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            image_host: self.image_host,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("timeouts must be greater than zero")]
    ZeroTimeout,
    #[error("CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY and CLOUDINARY_API_SECRET must be set together")]
    PartialImageHost,
    #[error("CLOUDINARY_SIGNATURE_ALGORITHM must be sha1 or sha256, got {0:?}")]
    InvalidSignatureAlgorithm(String),
}
