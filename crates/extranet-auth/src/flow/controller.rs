use std::sync::Arc;

use extranet_core::{
    store::{TokenStore, AUTH_TOKEN_KEY},
    ClientSettings,
};

use crate::{
    flow::{
        messages,
        validate::{is_valid_email, validate},
        Alert, AlertKind, Credentials, ValidationErrors,
    },
    provider::{AuthenticateResponse, IdentityProvider, ProviderError, ProviderSession},
};

/// Which form the host UI should render. Exactly one view is active at a
/// time, and the challenge views own the provider session for their step,
/// so a stale session cannot survive back into `Login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFlow {
    /// The email/password form. Initial state; also the state a completed
    /// flow returns to before the host redirects away.
    Login,
    /// A one-time code is required to finish logging in.
    MfaChallenge {
        #[allow(missing_docs)]
        session: ProviderSession,
    },
    /// The provider demands a new password before issuing a token.
    ForcedPasswordReset {
        #[allow(missing_docs)]
        session: ProviderSession,
    },
    /// A self-service reset is underway; the user enters the emailed code
    /// and a new password.
    PasswordResetRequest {
        #[allow(missing_docs)]
        session: ProviderSession,
    },
}

/// What the host UI should do after a submit resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stay on the current view; state and alert describe what happened.
    Stay,
    /// Fully authenticated: the token is persisted, navigate to the
    /// downstream application.
    Redirect(String),
    /// A request was already in flight and this submit was dropped.
    Ignored,
}

/// Owns the login form state and drives the view state machine from
/// identity provider responses.
///
/// One controller per page session. Only one provider call may be in
/// flight at a time; the busy flag is the sole guard and the host should
/// disable the submit affordance while [`AuthFlowController::is_loading`]
/// is true. Every submit resolves without failing the controller: provider
/// rejections and transport faults alike end up in the alert, leaving the
/// current view ready for resubmission.
pub struct AuthFlowController {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn TokenStore>,
    settings: ClientSettings,
    state: AuthFlow,
    alert: Option<Alert>,
    validation_errors: ValidationErrors,
    loading: bool,
}

impl AuthFlowController {
    /// Creates a controller at the login view.
    pub fn new(
        settings: ClientSettings,
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            provider,
            store,
            settings,
            state: AuthFlow::Login,
            alert: None,
            validation_errors: ValidationErrors::default(),
            loading: false,
        }
    }

    /// The active view.
    pub fn state(&self) -> &AuthFlow {
        &self.state
    }

    /// The active notification, if any.
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Field errors from the last login submit attempt.
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    /// True while a provider call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Clears the active notification.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Submits the login form. Valid credentials go to the provider; the
    /// response decides whether the user is done (redirect), challenged
    /// (view change), or rejected (alert).
    pub async fn submit_credentials(&mut self, credentials: &Credentials) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }

        self.alert = None;
        self.validation_errors = validate(credentials);
        if !self.validation_errors.is_empty() {
            self.show_alert(AlertKind::Warning, messages::FIELDS_REQUIRED);
            return SubmitOutcome::Stay;
        }

        self.loading = true;
        let result = self
            .provider
            .authenticate(&credentials.email, &credentials.password)
            .await;
        self.loading = false;

        match result {
            Ok(AuthenticateResponse::Authenticated { token }) => {
                self.complete_authentication(token, messages::LOGIN_SUCCESS)
                    .await
            }
            Ok(AuthenticateResponse::MfaRequired { session }) => {
                log::debug!("provider demanded an mfa code");
                self.state = AuthFlow::MfaChallenge { session };
                self.show_alert(AlertKind::Info, messages::MFA_REQUIRED);
                SubmitOutcome::Stay
            }
            Ok(AuthenticateResponse::NewPasswordRequired { session }) => {
                log::debug!("provider demanded a new password");
                self.state = AuthFlow::ForcedPasswordReset { session };
                self.show_alert(AlertKind::Info, messages::NEW_PASSWORD_REQUIRED);
                SubmitOutcome::Stay
            }
            Err(error) => {
                self.fail(error, messages::LOGIN_REJECTED);
                SubmitOutcome::Stay
            }
        }
    }

    /// Answers the MFA challenge with the code the user entered. Outside
    /// the MFA view this is a no-op.
    pub async fn submit_mfa_code(&mut self, code: &str) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }
        let AuthFlow::MfaChallenge { session } = &self.state else {
            log::debug!("mfa code submitted outside of an mfa challenge");
            return SubmitOutcome::Stay;
        };
        let session = session.clone();

        self.alert = None;
        self.loading = true;
        let result = self.provider.submit_mfa_code(&session, code).await;
        self.loading = false;

        match result {
            Ok(token) => self.complete_authentication(token, messages::MFA_SUCCESS).await,
            Err(error) => {
                self.fail(error, messages::MFA_REJECTED);
                SubmitOutcome::Stay
            }
        }
    }

    /// Completes a forced password reset. Empty or mismatched passwords
    /// are rejected locally without a provider call.
    pub async fn submit_new_password(
        &mut self,
        new_password: &str,
        confirm_password: &str,
    ) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }
        let AuthFlow::ForcedPasswordReset { session } = &self.state else {
            log::debug!("new password submitted outside of a forced reset");
            return SubmitOutcome::Stay;
        };

        if new_password.is_empty() || confirm_password.is_empty() {
            self.show_alert(AlertKind::Error, messages::NEW_PASSWORD_FIELDS_REQUIRED);
            return SubmitOutcome::Stay;
        }
        if new_password != confirm_password {
            self.show_alert(AlertKind::Error, messages::NEW_PASSWORD_MISMATCH);
            return SubmitOutcome::Stay;
        }
        let session = session.clone();

        self.alert = None;
        self.loading = true;
        let result = self.provider.submit_new_password(&session, new_password).await;
        self.loading = false;

        match result {
            Ok(token) => {
                self.complete_authentication(token, messages::NEW_PASSWORD_SUCCESS)
                    .await
            }
            Err(error) => {
                self.fail(error, messages::NEW_PASSWORD_FAILED);
                SubmitOutcome::Stay
            }
        }
    }

    /// Starts a self-service password reset for `email`. Only available
    /// from the login view; an invalid email is rejected locally.
    pub async fn request_password_reset(&mut self, email: &str) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }
        if self.state != AuthFlow::Login {
            log::debug!("password reset requested outside of the login view");
            return SubmitOutcome::Stay;
        }

        if !is_valid_email(email) {
            self.show_alert(AlertKind::Error, messages::RESET_EMAIL_INVALID);
            return SubmitOutcome::Stay;
        }

        self.loading = true;
        let result = self.provider.request_password_reset(email).await;
        self.loading = false;

        match result {
            Ok(session) => {
                self.state = AuthFlow::PasswordResetRequest { session };
                self.show_alert(AlertKind::Info, messages::RESET_CODE_SENT);
                SubmitOutcome::Stay
            }
            Err(error) => {
                self.fail(error, messages::RESET_REQUEST_FAILED);
                SubmitOutcome::Stay
            }
        }
    }

    /// Confirms the self-service reset with the emailed code and the new
    /// password. On acceptance the user is returned to the login view to
    /// authenticate with the new password; no token is issued.
    pub async fn submit_password_reset(
        &mut self,
        code: &str,
        new_password: &str,
    ) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::Ignored;
        }
        let AuthFlow::PasswordResetRequest { session } = &self.state else {
            log::debug!("password reset confirmed outside of a reset request");
            return SubmitOutcome::Stay;
        };
        let session = session.clone();

        self.alert = None;
        self.loading = true;
        let result = self
            .provider
            .confirm_password_reset(&session, code, new_password)
            .await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.state = AuthFlow::Login;
                self.show_alert(AlertKind::Success, messages::RESET_SUCCESS);
                SubmitOutcome::Stay
            }
            Err(error) => {
                self.fail(error, messages::RESET_FAILED);
                SubmitOutcome::Stay
            }
        }
    }

    /// Persists the token and reports the redirect. The token only reaches
    /// the store here, after the provider confirmed full authentication;
    /// if persisting fails the current view is kept so the user can retry.
    async fn complete_authentication(
        &mut self,
        token: String,
        success_message: &'static str,
    ) -> SubmitOutcome {
        if let Err(error) = self.store.set(AUTH_TOKEN_KEY, token).await {
            log::warn!("failed to persist access token: {error}");
            self.show_alert(AlertKind::Error, messages::INTERNAL_ERROR);
            return SubmitOutcome::Stay;
        }

        self.state = AuthFlow::Login;
        self.show_alert(AlertKind::Success, success_message);
        SubmitOutcome::Redirect(self.settings.redirect_url.clone())
    }

    /// Routes a provider error into the alert: rejections surface the
    /// provider's message (or the step's fallback), anything else becomes
    /// the generic internal error.
    fn fail(&mut self, error: ProviderError, fallback: &'static str) {
        match error.rejection_message() {
            Some(message) if !message.is_empty() => {
                let text = message.to_owned();
                self.show_alert(AlertKind::Error, text);
            }
            Some(_) => self.show_alert(AlertKind::Error, fallback),
            None => {
                log::warn!("identity provider call failed: {error}");
                self.show_alert(AlertKind::Error, messages::INTERNAL_ERROR);
            }
        }
    }

    fn show_alert(&mut self, kind: AlertKind, text: impl Into<String>) {
        self.alert = Some(Alert::new(kind, text));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use extranet_core::{store::MemoryTokenStore, ApiError};
    use reqwest::StatusCode;

    use super::*;

    /// Scripted provider double. Each operation hands out its prepared
    /// response once and records the call.
    #[derive(Default)]
    struct FakeProvider {
        authenticate_response: Mutex<Option<Result<AuthenticateResponse, ProviderError>>>,
        mfa_response: Mutex<Option<Result<String, ProviderError>>>,
        new_password_response: Mutex<Option<Result<String, ProviderError>>>,
        reset_request_response: Mutex<Option<Result<ProviderSession, ProviderError>>>,
        reset_confirm_response: Mutex<Option<Result<(), ProviderError>>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeProvider {
        fn new() -> Self {
            Self::default()
        }

        fn on_authenticate(self, response: Result<AuthenticateResponse, ProviderError>) -> Self {
            *self.authenticate_response.lock().unwrap() = Some(response);
            self
        }

        fn on_mfa(self, response: Result<String, ProviderError>) -> Self {
            *self.mfa_response.lock().unwrap() = Some(response);
            self
        }

        fn on_new_password(self, response: Result<String, ProviderError>) -> Self {
            *self.new_password_response.lock().unwrap() = Some(response);
            self
        }

        fn on_reset_request(self, response: Result<ProviderSession, ProviderError>) -> Self {
            *self.reset_request_response.lock().unwrap() = Some(response);
            self
        }

        fn on_reset_confirm(self, response: Result<(), ProviderError>) -> Self {
            *self.reset_confirm_response.lock().unwrap() = Some(response);
            self
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait::async_trait]
    impl IdentityProvider for FakeProvider {
        async fn authenticate(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<AuthenticateResponse, ProviderError> {
            self.record("authenticate");
            self.authenticate_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected authenticate call")
        }

        async fn submit_mfa_code(
            &self,
            _session: &ProviderSession,
            _code: &str,
        ) -> Result<String, ProviderError> {
            self.record("submit_mfa_code");
            self.mfa_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected submit_mfa_code call")
        }

        async fn submit_new_password(
            &self,
            _session: &ProviderSession,
            _new_password: &str,
        ) -> Result<String, ProviderError> {
            self.record("submit_new_password");
            self.new_password_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected submit_new_password call")
        }

        async fn request_password_reset(
            &self,
            _email: &str,
        ) -> Result<ProviderSession, ProviderError> {
            self.record("request_password_reset");
            self.reset_request_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected request_password_reset call")
        }

        async fn confirm_password_reset(
            &self,
            _session: &ProviderSession,
            _code: &str,
            _new_password: &str,
        ) -> Result<(), ProviderError> {
            self.record("confirm_password_reset");
            self.reset_confirm_response
                .lock()
                .unwrap()
                .take()
                .expect("unexpected confirm_password_reset call")
        }
    }

    fn test_settings() -> ClientSettings {
        ClientSettings {
            provider_url: "http://localhost".to_string(),
            client_id: "test-client-id".to_string(),
            redirect_url: "https://extranet.example.com/".to_string(),
            user_agent: "test-agent".to_string(),
        }
    }

    fn controller(
        provider: FakeProvider,
    ) -> (AuthFlowController, Arc<FakeProvider>, Arc<MemoryTokenStore>) {
        let provider = Arc::new(provider);
        let store = Arc::new(MemoryTokenStore::new());
        let controller =
            AuthFlowController::new(test_settings(), provider.clone(), store.clone());
        (controller, provider, store)
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn mfa_session() -> ProviderSession {
        ProviderSession {
            username: "user@example.com".to_string(),
            session: "session-1".to_string(),
        }
    }

    fn rejected(message: &str) -> ProviderError {
        ProviderError::Rejected {
            message: message.to_string(),
        }
    }

    fn transport_error() -> ProviderError {
        ApiError::ResponseContent {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".to_string(),
        }
        .into()
    }

    #[tokio::test]
    async fn test_invalid_credentials_block_submission_without_network_call() {
        let (mut flow, provider, _store) = controller(FakeProvider::new());

        let outcome = flow
            .submit_credentials(&credentials("not-an-email", "abc"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert!(provider.calls().is_empty());
        assert_eq!(
            flow.validation_errors().email,
            Some(messages::EMAIL_INVALID)
        );
        assert_eq!(
            flow.validation_errors().password,
            Some(messages::PASSWORD_TOO_SHORT)
        );
        let alert = flow.alert().expect("aggregate alert");
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.text, messages::FIELDS_REQUIRED);
    }

    #[tokio::test]
    async fn test_login_success_persists_token_and_redirects() {
        let (mut flow, _provider, store) = controller(FakeProvider::new().on_authenticate(Ok(
            AuthenticateResponse::Authenticated {
                token: "abc123".to_string(),
            },
        )));

        let outcome = flow
            .submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Redirect("https://extranet.example.com/".to_string())
        );
        assert_eq!(
            store.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("abc123".to_string())
        );
        assert_eq!(flow.state(), &AuthFlow::Login);
        let alert = flow.alert().expect("success alert");
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.text, messages::LOGIN_SUCCESS);
        assert!(!flow.is_loading());
    }

    #[tokio::test]
    async fn test_login_rejection_surfaces_provider_message() {
        let (mut flow, _provider, store) = controller(
            FakeProvider::new().on_authenticate(Err(rejected("Incorrect username or password."))),
        );

        let outcome = flow
            .submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        let alert = flow.alert().expect("error alert");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.text, "Incorrect username or password.");
    }

    #[tokio::test]
    async fn test_login_rejection_without_message_uses_fallback() {
        let (mut flow, _provider, _store) =
            controller(FakeProvider::new().on_authenticate(Err(rejected(""))));

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;

        let alert = flow.alert().expect("error alert");
        assert_eq!(alert.text, messages::LOGIN_REJECTED);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_alert_and_keeps_state() {
        let (mut flow, _provider, _store) =
            controller(FakeProvider::new().on_authenticate(Err(transport_error())));

        let outcome = flow
            .submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert!(!flow.is_loading());
        let alert = flow.alert().expect("error alert");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.text, messages::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_mfa_challenge_retains_session() {
        let (mut flow, _provider, _store) = controller(FakeProvider::new().on_authenticate(Ok(
            AuthenticateResponse::MfaRequired {
                session: mfa_session(),
            },
        )));

        let outcome = flow
            .submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(
            flow.state(),
            &AuthFlow::MfaChallenge {
                session: mfa_session()
            }
        );
        let alert = flow.alert().expect("info alert");
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.text, messages::MFA_REQUIRED);
    }

    #[tokio::test]
    async fn test_mfa_code_accepted_completes_login() {
        let (mut flow, _provider, store) = controller(
            FakeProvider::new()
                .on_authenticate(Ok(AuthenticateResponse::MfaRequired {
                    session: mfa_session(),
                }))
                .on_mfa(Ok("mfa-token".to_string())),
        );

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        let outcome = flow.submit_mfa_code("123456").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Redirect("https://extranet.example.com/".to_string())
        );
        assert_eq!(
            store.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("mfa-token".to_string())
        );
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert_eq!(
            flow.alert().expect("success alert").text,
            messages::MFA_SUCCESS
        );
    }

    #[tokio::test]
    async fn test_mfa_code_rejected_stays_in_challenge() {
        let (mut flow, _provider, store) = controller(
            FakeProvider::new()
                .on_authenticate(Ok(AuthenticateResponse::MfaRequired {
                    session: mfa_session(),
                }))
                .on_mfa(Err(rejected("Invalid code."))),
        );

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        let outcome = flow.submit_mfa_code("000000").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(
            flow.state(),
            &AuthFlow::MfaChallenge {
                session: mfa_session()
            }
        );
        assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        let alert = flow.alert().expect("error alert");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.text, "Invalid code.");
    }

    #[tokio::test]
    async fn test_mfa_code_outside_challenge_is_a_noop() {
        let (mut flow, provider, _store) = controller(FakeProvider::new());

        let outcome = flow.submit_mfa_code("123456").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_forced_reset_mismatched_passwords_block_without_network_call() {
        let (mut flow, provider, _store) = controller(FakeProvider::new().on_authenticate(Ok(
            AuthenticateResponse::NewPasswordRequired {
                session: mfa_session(),
            },
        )));

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        let outcome = flow.submit_new_password("newpass1", "newpass2").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(provider.calls(), vec!["authenticate"]);
        assert_eq!(
            flow.state(),
            &AuthFlow::ForcedPasswordReset {
                session: mfa_session()
            }
        );
        assert_eq!(
            flow.alert().expect("error alert").text,
            messages::NEW_PASSWORD_MISMATCH
        );
    }

    #[tokio::test]
    async fn test_forced_reset_empty_passwords_block_without_network_call() {
        let (mut flow, provider, _store) = controller(FakeProvider::new().on_authenticate(Ok(
            AuthenticateResponse::NewPasswordRequired {
                session: mfa_session(),
            },
        )));

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        let outcome = flow.submit_new_password("", "").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(provider.calls(), vec!["authenticate"]);
        assert_eq!(
            flow.alert().expect("error alert").text,
            messages::NEW_PASSWORD_FIELDS_REQUIRED
        );
    }

    #[tokio::test]
    async fn test_forced_reset_accepted_completes_login() {
        let (mut flow, _provider, store) = controller(
            FakeProvider::new()
                .on_authenticate(Ok(AuthenticateResponse::NewPasswordRequired {
                    session: mfa_session(),
                }))
                .on_new_password(Ok("fresh-token".to_string())),
        );

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        let outcome = flow.submit_new_password("newpass1", "newpass1").await;

        assert_eq!(
            outcome,
            SubmitOutcome::Redirect("https://extranet.example.com/".to_string())
        );
        assert_eq!(
            store.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("fresh-token".to_string())
        );
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert_eq!(
            flow.alert().expect("success alert").text,
            messages::NEW_PASSWORD_SUCCESS
        );
    }

    #[tokio::test]
    async fn test_reset_request_invalid_email_blocks_without_network_call() {
        let (mut flow, provider, _store) = controller(FakeProvider::new());

        let outcome = flow.request_password_reset("not-an-email").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert!(provider.calls().is_empty());
        assert_eq!(flow.state(), &AuthFlow::Login);
        let alert = flow.alert().expect("error alert");
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.text, messages::RESET_EMAIL_INVALID);
    }

    #[tokio::test]
    async fn test_reset_request_moves_to_reset_view() {
        let reset_session = ProviderSession {
            username: "user@example.com".to_string(),
            session: String::new(),
        };
        let (mut flow, _provider, _store) =
            controller(FakeProvider::new().on_reset_request(Ok(reset_session.clone())));

        let outcome = flow.request_password_reset("user@example.com").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(
            flow.state(),
            &AuthFlow::PasswordResetRequest {
                session: reset_session
            }
        );
        let alert = flow.alert().expect("info alert");
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.text, messages::RESET_CODE_SENT);
    }

    #[tokio::test]
    async fn test_reset_confirmed_returns_to_login_without_token() {
        let reset_session = ProviderSession {
            username: "user@example.com".to_string(),
            session: String::new(),
        };
        let (mut flow, _provider, store) = controller(
            FakeProvider::new()
                .on_reset_request(Ok(reset_session))
                .on_reset_confirm(Ok(())),
        );

        flow.request_password_reset("user@example.com").await;
        let outcome = flow.submit_password_reset("654321", "newpass1").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(flow.state(), &AuthFlow::Login);
        assert_eq!(store.get(AUTH_TOKEN_KEY).await.unwrap(), None);
        let alert = flow.alert().expect("success alert");
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.text, messages::RESET_SUCCESS);
    }

    #[tokio::test]
    async fn test_reset_rejection_stays_in_reset_view() {
        let reset_session = ProviderSession {
            username: "user@example.com".to_string(),
            session: String::new(),
        };
        let (mut flow, _provider, _store) = controller(
            FakeProvider::new()
                .on_reset_request(Ok(reset_session.clone()))
                .on_reset_confirm(Err(rejected("Invalid verification code provided."))),
        );

        flow.request_password_reset("user@example.com").await;
        let outcome = flow.submit_password_reset("000000", "newpass1").await;

        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(
            flow.state(),
            &AuthFlow::PasswordResetRequest {
                session: reset_session
            }
        );
        assert_eq!(
            flow.alert().expect("error alert").text,
            "Invalid verification code provided."
        );
    }

    #[tokio::test]
    async fn test_dismiss_alert_clears_notification() {
        let (mut flow, _provider, _store) =
            controller(FakeProvider::new().on_authenticate(Err(rejected("nope"))));

        flow.submit_credentials(&credentials("user@example.com", "abcdef"))
            .await;
        assert!(flow.alert().is_some());

        flow.dismiss_alert();
        assert!(flow.alert().is_none());
    }
}
