use api::{request_password_reset, signin, signup, AuthError, Registration};

fn registration() -> Registration {
    Registration {
        full_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        password: "Password123".to_string(),
        confirm_password: "Password123".to_string(),
        accepted_terms: true,
    }
}

#[test]
fn test_signin_accepts_any_non_empty_credentials() {
    let session = signin("john", "anything").expect("signin should succeed");
    assert_eq!(session.username, "john");
}

#[test]
fn test_signin_rejects_blank_username() {
    let err = signin("   ", "secret").unwrap_err();
    assert_eq!(err, AuthError::UsernameRequired);
    assert_eq!(err.key(), "usernameRequired");
}

#[test]
fn test_signup_rejects_mismatched_confirmation() {
    let form = Registration {
        confirm_password: "Password124".to_string(),
        ..registration()
    };
    let err = signup(&form).unwrap_err();
    assert_eq!(err.key(), "passwordMismatch");
    assert!(err.to_string().contains("do not match"));
}

#[test]
fn test_signup_requires_terms() {
    let form = Registration {
        accepted_terms: false,
        ..registration()
    };
    assert_eq!(signup(&form), Err(AuthError::TermsNotAccepted));
    assert_eq!(signup(&registration()), Ok(()));
}

#[test]
fn test_password_reset_requires_valid_email() {
    assert_eq!(request_password_reset(""), Err(AuthError::EmailRequired));
    assert_eq!(
        request_password_reset("not-an-email"),
        Err(AuthError::InvalidEmail)
    );
    assert!(request_password_reset("john@example.com").is_ok());
}
