//! Wire models for the Cognito identity provider API.
//!
//! All actions go to a single endpoint as `x-amz-json-1.1` POSTs, selected
//! by the `X-Amz-Target` header. Field casing follows the service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub(crate) const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";
pub(crate) const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub(crate) const AUTH_FLOW_USER_PASSWORD: &str = "USER_PASSWORD_AUTH";
pub(crate) const CHALLENGE_SMS_MFA: &str = "SMS_MFA";
pub(crate) const CHALLENGE_NEW_PASSWORD_REQUIRED: &str = "NEW_PASSWORD_REQUIRED";

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest {
    pub auth_flow: &'static str,
    pub client_id: String,
    pub auth_parameters: AuthParameters,
}

#[derive(Serialize, Debug)]
pub(crate) struct AuthParameters {
    #[serde(rename = "USERNAME")]
    pub username: String,
    #[serde(rename = "PASSWORD")]
    pub password: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RespondToAuthChallengeRequest {
    pub challenge_name: &'static str,
    pub client_id: String,
    pub session: String,
    pub challenge_responses: BTreeMap<&'static str, String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ForgotPasswordRequest {
    pub client_id: String,
    pub username: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ConfirmForgotPasswordRequest {
    pub client_id: String,
    pub username: String,
    pub confirmation_code: String,
    pub password: String,
}

/// Response shape shared by `InitiateAuth` and `RespondToAuthChallenge`:
/// either an authentication result, or a challenge to answer next.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthFlowApiResponse {
    pub authentication_result: Option<AuthenticationResult>,
    pub challenge_name: Option<String>,
    pub session: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationResult {
    pub access_token: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ForgotPasswordApiResponse {
    // Delivery medium and destination; the flow only surfaces a fixed
    // "code sent" message, so the contents are not used.
    #[allow(dead_code)]
    pub code_delivery_details: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ConfirmForgotPasswordApiResponse {}

/// Rejection body. The service reports the exception type under `__type`
/// and a user-facing message under `message` (sometimes `Message`).
#[derive(Deserialize, Debug)]
pub(crate) struct CognitoErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
