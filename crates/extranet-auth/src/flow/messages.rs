//! User-facing strings, hardcoded in the extranet's single locale (pt-BR).

pub(crate) const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub(crate) const EMAIL_INVALID: &str = "Por favor, insira um e-mail válido";
pub(crate) const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Senha deve ter pelo menos 6 caracteres";
pub(crate) const FIELDS_REQUIRED: &str = "Os campos de e-mail e senha são obrigatórios.";

pub(crate) const LOGIN_SUCCESS: &str = "Login realizado com sucesso!";
pub(crate) const LOGIN_REJECTED: &str = "Erro de autenticação - Verifique o email e senha";
pub(crate) const MFA_REQUIRED: &str = "Autenticação de dois fatores necessária.";
pub(crate) const MFA_SUCCESS: &str = "Autenticado com sucesso!";
pub(crate) const MFA_REJECTED: &str = "Erro ao validar código MFA.";

pub(crate) const NEW_PASSWORD_REQUIRED: &str = "Nova senha necessária.";
pub(crate) const NEW_PASSWORD_FIELDS_REQUIRED: &str = "Preencha todos os campos.";
pub(crate) const NEW_PASSWORD_MISMATCH: &str = "As senhas não coincidem.";
pub(crate) const NEW_PASSWORD_SUCCESS: &str = "Senha atualizada com sucesso!";
pub(crate) const NEW_PASSWORD_FAILED: &str = "Erro ao definir nova senha.";

pub(crate) const RESET_EMAIL_INVALID: &str = "Insira um e-mail válido para recuperar sua senha.";
pub(crate) const RESET_CODE_SENT: &str = "Um código foi enviado para seu e-mail.";
pub(crate) const RESET_REQUEST_FAILED: &str = "Erro ao solicitar redefinição de senha.";
pub(crate) const RESET_SUCCESS: &str = "Senha redefinida com sucesso.";
pub(crate) const RESET_FAILED: &str = "Erro ao redefinir senha.";

pub(crate) const INTERNAL_ERROR: &str = "Erro interno do servidor. Tente novamente.";
