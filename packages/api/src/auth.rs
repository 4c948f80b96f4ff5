use std::fmt;

use crate::types::Session;

/// Validation failures of the sign-in, sign-up and password reset forms.
///
/// Each variant maps to a translation key so pages can show it inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    UsernameRequired,
    PasswordRequired,
    FullNameRequired,
    EmailRequired,
    InvalidEmail,
    PasswordMismatch,
    TermsNotAccepted,
}

impl AuthError {
    pub fn key(self) -> &'static str {
        match self {
            AuthError::UsernameRequired => "usernameRequired",
            AuthError::PasswordRequired => "passwordRequired",
            AuthError::FullNameRequired => "fullNameRequired",
            AuthError::EmailRequired => "emailRequired",
            AuthError::InvalidEmail => "invalidEmail",
            AuthError::PasswordMismatch => "passwordMismatch",
            AuthError::TermsNotAccepted => "termsNotAccepted",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AuthError::UsernameRequired => "username is required",
            AuthError::PasswordRequired => "password is required",
            AuthError::FullNameRequired => "full name is required",
            AuthError::EmailRequired => "email is required",
            AuthError::InvalidEmail => "email address is invalid",
            AuthError::PasswordMismatch => "password and confirmation do not match",
            AuthError::TermsNotAccepted => "terms of service were not accepted",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for AuthError {}

/// Fields of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

/// Every missing field of the sign-in form, in display order.
pub fn validate_login(username: &str, password: &str) -> Vec<AuthError> {
    let mut errors = Vec::new();
    if username.trim().is_empty() {
        errors.push(AuthError::UsernameRequired);
    }
    if password.is_empty() {
        errors.push(AuthError::PasswordRequired);
    }
    errors
}

/// Simulated sign-in: any non-empty credentials are accepted.
pub fn signin(username: &str, password: &str) -> Result<Session, AuthError> {
    if let Some(err) = validate_login(username, password).into_iter().next() {
        tracing::debug!("auth.signin: rejected ({err})");
        return Err(err);
    }
    tracing::info!("auth.signin: username={}", username.trim());
    Ok(Session {
        username: username.trim().to_string(),
    })
}

/// First problem with a sign-up form. The confirmation mismatch is checked
/// before the terms checkbox.
pub fn validate_registration(form: &Registration) -> Result<(), AuthError> {
    if form.full_name.trim().is_empty() {
        return Err(AuthError::FullNameRequired);
    }
    validate_email(&form.email)?;
    if form.password.is_empty() {
        return Err(AuthError::PasswordRequired);
    }
    if form.password != form.confirm_password {
        return Err(AuthError::PasswordMismatch);
    }
    if !form.accepted_terms {
        return Err(AuthError::TermsNotAccepted);
    }
    Ok(())
}

pub fn signup(form: &Registration) -> Result<(), AuthError> {
    validate_registration(form)?;
    tracing::info!("auth.signup: email={}", email_label(&form.email));
    Ok(())
}

pub fn request_password_reset(email: &str) -> Result<(), AuthError> {
    validate_email(email)?;
    tracing::info!("auth.request_password_reset: email={}", email_label(email));
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::EmailRequired);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AuthError::InvalidEmail),
    }
}

/// Redacted form of an address for logs: keeps only the domain.
pub fn email_label(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((_, domain)) if !domain.is_empty() => format!("***@{domain}"),
        _ => "<invalid>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> Registration {
        Registration {
            full_name: "Nguyễn Văn A".to_string(),
            email: "a@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_login_reports_every_missing_field() {
        assert_eq!(
            validate_login("", ""),
            vec![AuthError::UsernameRequired, AuthError::PasswordRequired]
        );
        assert_eq!(validate_login("  ", "x"), vec![AuthError::UsernameRequired]);
        assert!(validate_login("admin", "x").is_empty());
    }

    #[test]
    fn test_signin_trims_username() {
        let session = signin(" admin ", "secret").unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(signin("admin", ""), Err(AuthError::PasswordRequired));
    }

    #[test]
    fn test_registration_accepts_valid_form() {
        assert_eq!(validate_registration(&valid_registration()), Ok(()));
        assert_eq!(signup(&valid_registration()), Ok(()));
    }

    #[test]
    fn test_mismatch_is_reported_before_terms() {
        let form = Registration {
            confirm_password: "other".to_string(),
            accepted_terms: false,
            ..valid_registration()
        };
        assert_eq!(validate_registration(&form), Err(AuthError::PasswordMismatch));
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let form = Registration {
            accepted_terms: false,
            ..valid_registration()
        };
        assert_eq!(validate_registration(&form), Err(AuthError::TermsNotAccepted));
    }

    #[test]
    fn test_email_validation() {
        assert_eq!(validate_email(""), Err(AuthError::EmailRequired));
        assert_eq!(validate_email("nobody"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_email("a@localhost"), Err(AuthError::InvalidEmail));
        assert_eq!(validate_email(" you@example.com "), Ok(()));
        assert_eq!(request_password_reset("you@example.com"), Ok(()));
    }

    #[test]
    fn test_email_label_hides_local_part() {
        assert_eq!(email_label("john@example.com"), "***@example.com");
        assert_eq!(email_label("nope"), "<invalid>");
    }

    #[test]
    fn test_error_keys_are_distinct() {
        let all = [
            AuthError::UsernameRequired,
            AuthError::PasswordRequired,
            AuthError::FullNameRequired,
            AuthError::EmailRequired,
            AuthError::InvalidEmail,
            AuthError::PasswordMismatch,
            AuthError::TermsNotAccepted,
        ];
        let mut keys: Vec<_> = all.iter().map(|e| e.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), all.len());
    }
}
