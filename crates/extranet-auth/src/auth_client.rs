use std::sync::Arc;

use extranet_core::{store::TokenStore, ApiError, ClientSettings};

use crate::{
    flow::AuthFlowController,
    provider::{CognitoProvider, IdentityProvider},
};

/// Entry point wiring settings, an identity provider and a token store
/// into login flow controllers.
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use extranet_auth::AuthClient;
/// # use extranet_core::{store::MemoryTokenStore, ClientSettings};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ClientSettings {
///     client_id: "app-client-id".to_string(),
///     ..ClientSettings::default()
/// };
/// let client = AuthClient::new(settings, Arc::new(MemoryTokenStore::new()))?;
/// let flow = client.flow();
/// // Drive `flow` from the login form...
/// # Ok(())
/// # }
/// ```
pub struct AuthClient {
    settings: ClientSettings,
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn TokenStore>,
}

impl AuthClient {
    /// Client talking to the Cognito endpoint named in `settings`.
    pub fn new(settings: ClientSettings, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let provider = Arc::new(CognitoProvider::new(&settings)?);
        Ok(Self::with_provider(settings, provider, store))
    }

    /// Client over a custom identity provider implementation.
    pub fn with_provider(
        settings: ClientSettings,
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            settings,
            provider,
            store,
        }
    }

    /// A new flow controller starting at the login view. One per page
    /// session.
    pub fn flow(&self) -> AuthFlowController {
        AuthFlowController::new(
            self.settings.clone(),
            self.provider.clone(),
            self.store.clone(),
        )
    }
}
