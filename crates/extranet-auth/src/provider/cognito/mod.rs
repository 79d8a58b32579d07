//! Cognito implementation of the identity provider capability.

mod api;

use std::collections::BTreeMap;

use extranet_core::{require, ApiError, ClientSettings};
use serde::{de::DeserializeOwned, Serialize};

use crate::provider::{
    AuthenticateResponse, IdentityProvider, ProviderError, ProviderSession,
};

/// Identity provider client speaking the Cognito `x-amz-json-1.1` protocol.
///
/// Holds no per-user state; challenge correlation travels through the
/// [`ProviderSession`] handles the flow controller keeps in its view state.
pub struct CognitoProvider {
    client: reqwest::Client,
    endpoint: String,
    client_id: String,
}

impl CognitoProvider {
    /// Creates a provider for the endpoint and app client in `settings`.
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            client,
            endpoint: settings.provider_url.clone(),
            client_id: settings.client_id.clone(),
        })
    }

    /// Sends one provider action and splits the response into the success
    /// model, a provider rejection, or a transport-tier failure.
    async fn post<R>(&self, target: &str, payload: &impl Serialize) -> Result<R, ProviderError>
    where
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload).map_err(ApiError::from)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Amz-Target", format!("{}.{target}", api::TARGET_PREFIX))
            .header(reqwest::header::CONTENT_TYPE, api::AMZ_JSON_CONTENT_TYPE)
            // Token responses must not be cached.
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .body(body)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<R>().await.map_err(ApiError::from)?);
        }

        // Rejections come back as client errors with a JSON body naming the
        // exception type; anything else is a transport-tier failure.
        if status.is_client_error() {
            let rejection: api::CognitoErrorResponse =
                response.json().await.map_err(ApiError::from)?;
            let message = rejection
                .message
                .or(rejection.error_type)
                .unwrap_or_else(|| status.to_string());
            return Err(ProviderError::Rejected { message });
        }

        let message = response.text().await.unwrap_or_default();
        Err(ApiError::ResponseContent { status, message }.into())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for CognitoProvider {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticateResponse, ProviderError> {
        let request = api::InitiateAuthRequest {
            auth_flow: api::AUTH_FLOW_USER_PASSWORD,
            client_id: self.client_id.clone(),
            auth_parameters: api::AuthParameters {
                username: username.to_owned(),
                password: password.to_owned(),
            },
        };

        let response: api::AuthFlowApiResponse = self.post("InitiateAuth", &request).await?;

        if let Some(result) = response.authentication_result {
            return Ok(AuthenticateResponse::Authenticated {
                token: result.access_token,
            });
        }

        let session = ProviderSession {
            username: username.to_owned(),
            session: require!(response.session),
        };

        match require!(response.challenge_name).as_str() {
            api::CHALLENGE_SMS_MFA => Ok(AuthenticateResponse::MfaRequired { session }),
            api::CHALLENGE_NEW_PASSWORD_REQUIRED => {
                Ok(AuthenticateResponse::NewPasswordRequired { session })
            }
            other => Err(ProviderError::Rejected {
                message: format!("Unsupported authentication challenge: {other}"),
            }),
        }
    }

    async fn submit_mfa_code(
        &self,
        session: &ProviderSession,
        code: &str,
    ) -> Result<String, ProviderError> {
        let mut challenge_responses = BTreeMap::new();
        challenge_responses.insert("USERNAME", session.username.clone());
        challenge_responses.insert("SMS_MFA_CODE", code.to_owned());

        let request = api::RespondToAuthChallengeRequest {
            challenge_name: api::CHALLENGE_SMS_MFA,
            client_id: self.client_id.clone(),
            session: session.session.clone(),
            challenge_responses,
        };

        let response: api::AuthFlowApiResponse =
            self.post("RespondToAuthChallenge", &request).await?;
        let result = require!(response.authentication_result);
        Ok(result.access_token)
    }

    async fn submit_new_password(
        &self,
        session: &ProviderSession,
        new_password: &str,
    ) -> Result<String, ProviderError> {
        let mut challenge_responses = BTreeMap::new();
        challenge_responses.insert("USERNAME", session.username.clone());
        challenge_responses.insert("NEW_PASSWORD", new_password.to_owned());

        let request = api::RespondToAuthChallengeRequest {
            challenge_name: api::CHALLENGE_NEW_PASSWORD_REQUIRED,
            client_id: self.client_id.clone(),
            session: session.session.clone(),
            challenge_responses,
        };

        let response: api::AuthFlowApiResponse =
            self.post("RespondToAuthChallenge", &request).await?;
        let result = require!(response.authentication_result);
        Ok(result.access_token)
    }

    async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let request = api::ForgotPasswordRequest {
            client_id: self.client_id.clone(),
            username: email.to_owned(),
        };

        let _response: api::ForgotPasswordApiResponse =
            self.post("ForgotPassword", &request).await?;

        // Confirming the reset only needs the username; this flow has no
        // provider session token.
        Ok(ProviderSession {
            username: email.to_owned(),
            session: String::new(),
        })
    }

    async fn confirm_password_reset(
        &self,
        session: &ProviderSession,
        code: &str,
        new_password: &str,
    ) -> Result<(), ProviderError> {
        let request = api::ConfirmForgotPasswordRequest {
            client_id: self.client_id.clone(),
            username: session.username.clone(),
            confirmation_code: code.to_owned(),
            password: new_password.to_owned(),
        };

        let _response: api::ConfirmForgotPasswordApiResponse =
            self.post("ConfirmForgotPassword", &request).await?;
        Ok(())
    }
}
