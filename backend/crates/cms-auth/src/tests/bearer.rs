use crate::{AuthError, bearer_token};

#[test]
fn given_bearer_header_when_parsed_then_returns_token() {
    assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
}

#[test]
fn given_no_header_when_parsed_then_missing_credentials() {
    assert!(matches!(
        bearer_token(None),
        Err(AuthError::MissingCredentials { .. })
    ));
}

#[test]
fn given_basic_scheme_when_parsed_then_unsupported_scheme() {
    assert!(matches!(
        bearer_token(Some("Basic dXNlcjpwYXNz")),
        Err(AuthError::UnsupportedScheme { ref scheme, .. }) if scheme == "Basic"
    ));
}

#[test]
fn given_empty_bearer_when_parsed_then_empty_token() {
    assert!(matches!(
        bearer_token(Some("Bearer   ")),
        Err(AuthError::EmptyToken { .. })
    ));
}
