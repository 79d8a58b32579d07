//! Identity provider capability.
//!
//! The flow controller only ever talks to an identity provider through the
//! [`IdentityProvider`] trait, so the state machine can be exercised with a
//! fake provider and the concrete wire protocol stays an implementation
//! detail of [`cognito`].

use extranet_core::ApiError;
use thiserror::Error;

pub mod cognito;

pub use cognito::CognitoProvider;

/// Opaque handle correlating a multi-step challenge with the original login
/// attempt. Returned by the provider when it demands a second step and
/// passed back verbatim when answering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    /// Username the challenge was issued for.
    pub username: String,
    /// Provider session token for the challenge. Empty when the flow only
    /// needs the username to correlate, as the password reset flow does.
    pub session: String,
}

/// Outcome of an initial username/password authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticateResponse {
    /// The user is fully authenticated and a token was issued.
    Authenticated {
        #[allow(missing_docs)]
        token: String,
    },
    /// The provider demands a one-time code before issuing a token.
    MfaRequired {
        #[allow(missing_docs)]
        session: ProviderSession,
    },
    /// The provider demands a new password before issuing a token.
    NewPasswordRequired {
        #[allow(missing_docs)]
        session: ProviderSession,
    },
}

/// Error for identity provider operations.
///
/// `Rejected` is the provider saying no (bad credentials, bad code, expired
/// session) and carries the user-facing message it supplied. Everything
/// else is a transport or protocol failure the user cannot act on.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[allow(missing_docs)]
    #[error("{message}")]
    Rejected { message: String },
    #[allow(missing_docs)]
    #[error(transparent)]
    Api(#[from] ApiError),
    #[allow(missing_docs)]
    #[error(transparent)]
    MissingField(#[from] extranet_core::MissingFieldError),
}

impl ProviderError {
    /// The provider-supplied message, if this is a rejection.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => Some(message),
            _ => None,
        }
    }
}

/// Operations the login flow needs from an identity provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates with username and password. May come back with a
    /// token, or with a challenge demanding a further step.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticateResponse, ProviderError>;

    /// Answers an MFA challenge with the one-time code the user received.
    /// Returns the access token on acceptance.
    async fn submit_mfa_code(
        &self,
        session: &ProviderSession,
        code: &str,
    ) -> Result<String, ProviderError>;

    /// Completes a forced password reset by setting a new password.
    /// Returns the access token on acceptance.
    async fn submit_new_password(
        &self,
        session: &ProviderSession,
        new_password: &str,
    ) -> Result<String, ProviderError>;

    /// Asks the provider to send a password reset code to `email`. Returns
    /// the session handle to confirm the reset with.
    async fn request_password_reset(&self, email: &str)
        -> Result<ProviderSession, ProviderError>;

    /// Confirms a self-service password reset with the received code and
    /// the new password. No token is issued; the user logs in again.
    async fn confirm_password_reset(
        &self,
        session: &ProviderSession,
        code: &str,
        new_password: &str,
    ) -> Result<(), ProviderError>;
}
