use crate::flow::messages;

/// Passwords shorter than this are rejected before any network call.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Raw login form input. Cleared only when the host navigates away from
/// the login view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    #[allow(missing_docs)]
    pub email: String,
    #[allow(missing_docs)]
    pub password: String,
}

/// Per-field validation errors, recomputed on every submit attempt. A
/// non-empty set blocks submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    #[allow(missing_docs)]
    pub email: Option<&'static str>,
    #[allow(missing_docs)]
    pub password: Option<&'static str>,
}

impl ValidationErrors {
    /// True when both fields passed validation.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Checks the basic `local@domain.tld` shape: a single `@` with a
/// non-empty local part, and a domain containing a dot with non-empty
/// segments around it. No whitespace anywhere.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates the login form. Returns the empty error set iff both the
/// email and password checks pass.
pub fn validate(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if credentials.email.is_empty() {
        errors.email = Some(messages::EMAIL_REQUIRED);
    } else if !is_valid_email(&credentials.email) {
        errors.email = Some(messages::EMAIL_INVALID);
    }

    if credentials.password.is_empty() {
        errors.password = Some(messages::PASSWORD_REQUIRED);
    } else if credentials.password.chars().count() < MIN_PASSWORD_CHARS {
        errors.password = Some(messages::PASSWORD_TOO_SHORT);
    }

    errors
}
