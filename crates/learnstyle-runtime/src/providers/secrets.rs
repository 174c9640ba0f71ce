//! Secure credential handling for classifier providers.
//!
//! A single service credential is read from the process environment at
//! startup. Its absence is a legitimate, handled configuration state —
//! the gateway answers with the demonstration result — so loading never
//! fails the process.
//!
//! Using this module ensures:
//!
//! - **No accidental logging**: credentials cannot appear in Debug/Display output
//! - **Memory safety**: credentials are zeroed on drop
//! - **Explicit exposure**: the value is only readable via `.expose()`

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the
/// actual credential value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// This wrapper provides:
/// - Safe Debug implementation that shows `[REDACTED]`
/// - Memory zeroing on drop via the `secrecy` crate
/// - Explicit exposure via `.expose()`
/// - Source tracking for debugging
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Create a new credential from a string value.
    ///
    /// The value is immediately wrapped in SecretString and cannot be
    /// accidentally logged after this point.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    ///
    /// An unset or empty variable yields an empty credential — a
    /// handled state, not an error. Check with [`ApiCredential::is_empty`].
    pub fn from_env(env_var: &str, name: &'static str) -> Self {
        let value = std::env::var(env_var).unwrap_or_default();
        Self::new(value, CredentialSource::Environment, name)
    }

    /// Expose the credential value for use in an API call.
    ///
    /// # Security
    ///
    /// Only call this at the point where the credential is actually
    /// needed (e.g., setting an HTTP header). Never store the exposed
    /// value.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Check if the credential is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Get the source of this credential.
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Get the human-readable name of this credential.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("value", &"[REDACTED]")
            .field("source", &self.source)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} [REDACTED]", self.name, self.source)
    }
}
