use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These specify the identity provider
/// endpoint and app client the SDK authenticates against, and the
/// downstream application users are sent to after a fully authenticated
/// login. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use extranet_core::ClientSettings;
/// let settings = ClientSettings {
///     provider_url: "https://cognito-idp.us-east-1.amazonaws.com".to_string(),
///     client_id: String::new(),
///     redirect_url: "https://extranet.example.com/".to_string(),
///     user_agent: "Extranet Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The identity provider endpoint. Defaults to `https://cognito-idp.us-east-1.amazonaws.com`
    pub provider_url: String,
    /// The app client id registered with the identity provider.
    pub client_id: String,
    /// Where to send the user after a fully authenticated login.
    pub redirect_url: String,
    /// The user_agent sent with provider requests. Defaults to `Extranet Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            provider_url: "https://cognito-idp.us-east-1.amazonaws.com".into(),
            client_id: String::new(),
            redirect_url: "https://extranet.example.com/".into(),
            user_agent: "Extranet Rust-SDK".into(),
        }
    }
}
