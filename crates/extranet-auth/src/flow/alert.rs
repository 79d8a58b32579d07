/// Kind of the active notification, mapped by the host UI onto its alert
/// styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    #[allow(missing_docs)]
    Error,
    #[allow(missing_docs)]
    Success,
    #[allow(missing_docs)]
    Warning,
    #[allow(missing_docs)]
    Info,
}

/// The single active notification. A new alert replaces the previous one;
/// dismissal clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    #[allow(missing_docs)]
    pub kind: AlertKind,
    #[allow(missing_docs)]
    pub text: String,
}

impl Alert {
    pub(crate) fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
