use super::*;

#[test]
fn rejected_with_backend_message() {
    let err = BackendError::Rejected { status: 401, message: Some("Credenciais inválidas ou conta inativa".to_owned()) };
    let failure = LoginFailure::from_backend(&err, DEFAULT_LOGIN_ERROR);
    assert_eq!(failure.kind, FailureKind::CredentialRejected);
    assert_eq!(failure.message, "Credenciais inválidas ou conta inativa");
}

#[test]
fn rejected_without_message_uses_fallback() {
    let err = BackendError::Rejected { status: 401, message: None };
    let failure = LoginFailure::from_backend(&err, DEFAULT_LOGIN_ERROR);
    assert_eq!(failure.message, DEFAULT_LOGIN_ERROR);
}

#[test]
fn transport_failure_is_transient_with_generic_message() {
    let err = BackendError::Transport("connection refused".to_owned());
    let failure = LoginFailure::from_backend(&err, DEFAULT_LOGIN_ERROR);
    assert_eq!(failure.kind, FailureKind::TransientNetworkError);
    assert_eq!(failure.message, DEFAULT_LOGIN_ERROR);
}

#[test]
fn server_error_keeps_backend_message_but_is_transient() {
    let err = BackendError::Rejected { status: 500, message: Some("Erro interno durante a autenticação".to_owned()) };
    let failure = LoginFailure::from_backend(&err, DEFAULT_LOGIN_ERROR);
    assert_eq!(failure.kind, FailureKind::TransientNetworkError);
    assert_eq!(failure.message, "Erro interno durante a autenticação");
}

#[test]
fn unexpected_shape_counts_as_rejection() {
    let err = BackendError::UnexpectedResponse("missing field `token`".to_owned());
    let failure = LoginFailure::from_backend(&err, DEFAULT_LOGIN_ERROR);
    assert_eq!(failure.kind, FailureKind::CredentialRejected);
    assert_eq!(failure.to_string(), DEFAULT_LOGIN_ERROR);
}
