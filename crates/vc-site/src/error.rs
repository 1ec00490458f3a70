#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("message bundle error: {0}")]
    Bundle(#[from] vc_i18n::BundleError),

    #[error("locale not found: {locale}")]
    NotFound { locale: String },

    #[error("invalid config: {}", errors.join("; "))]
    InvalidConfig { errors: Vec<String> },

    #[error("incomplete translations: {}", missing.join(", "))]
    MissingTranslations { missing: Vec<String> },

    #[error("config file does not exist: {path}")]
    MissingConfig { path: PathBuf },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl SiteError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::InvalidArgument { .. } => 2,
            Self::InvalidConfig { .. } | Self::MissingTranslations { .. } => 3,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(locale: impl Into<String>) -> Self {
        Self::NotFound {
            locale: locale.into(),
        }
    }
}
