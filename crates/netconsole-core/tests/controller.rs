//! Integration tests for the account form controller.
//!
//! These tests use a recording service to observe exactly what the
//! controller dispatches, without any transport.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use netconsole_core::{
    Account, AccountFormController, AccountId, AccountPayload, AccountService, FormError,
    FormEvent, Role, SessionState, SubmitError, ValidationError,
};

/// A call the controller made.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Create(AccountPayload),
    Update(AccountId, AccountPayload),
}

/// Service that records calls and answers with a canned result.
struct RecordingService {
    calls: Mutex<Vec<Call>>,
    reject_with: Option<String>,
}

impl RecordingService {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_with: None,
        }
    }

    fn rejecting(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reject_with: Some(message.to_string()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, id: AccountId, payload: &AccountPayload) -> Result<Account, String> {
        if let Some(message) = &self.reject_with {
            return Err(message.clone());
        }
        let role = if payload.super_user {
            Role::SuperUser
        } else {
            Role::Standard
        };
        Ok(Account::new(id, payload.email.clone())
            .with_role(role)
            .with_networks(payload.network_ids.clone()))
    }
}

impl AccountService for RecordingService {
    type Error = String;

    async fn create_account(&self, payload: AccountPayload) -> Result<Account, String> {
        self.calls.lock().unwrap().push(Call::Create(payload.clone()));
        self.answer(AccountId::new("new"), &payload)
    }

    async fn update_account(
        &self,
        id: &AccountId,
        payload: AccountPayload,
    ) -> Result<Account, String> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Update(id.clone(), payload.clone()));
        self.answer(id.clone(), &payload)
    }
}

fn networks() -> Option<Vec<String>> {
    Some(vec!["net1".to_string(), "net2".to_string()])
}

#[tokio::test]
async fn create_dispatches_once() {
    let service = RecordingService::new();
    let mut controller = AccountFormController::open_create(networks());
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("x".to_string()));
    controller.apply(FormEvent::NetworkToggled("net1".to_string()));

    let account = controller.submit_to(&service).await.unwrap();
    assert_eq!(account.email, "a@b.com");
    assert_eq!(
        service.calls(),
        vec![Call::Create(AccountPayload {
            email: "a@b.com".to_string(),
            password: Some("x".to_string()),
            super_user: false,
            network_ids: vec!["net1".to_string()],
        })]
    );
    assert_eq!(controller.session(), SessionState::Submitted);
}

#[tokio::test]
async fn edit_super_user_omits_password_and_networks() {
    let service = RecordingService::new();
    let existing = Account::new("u1", "a@b.com").with_networks(["net1"]);
    let mut controller = AccountFormController::open_edit(&existing, networks());
    controller.apply(FormEvent::SuperUserToggled(true));

    let account = controller.submit_to(&service).await.unwrap();
    assert!(account.is_super_user());

    let calls = service.calls();
    assert_eq!(
        calls,
        vec![Call::Update(
            AccountId::new("u1"),
            AccountPayload {
                email: "a@b.com".to_string(),
                password: None,
                super_user: true,
                network_ids: Vec::new(),
            }
        )]
    );

    let Call::Update(_, payload) = &calls[0] else {
        panic!("expected update");
    };
    let json = serde_json::to_value(payload).unwrap();
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn validation_failure_dispatches_nothing() {
    let service = RecordingService::new();
    let mut controller = AccountFormController::open_create(None);
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("y".to_string()));

    let err = controller.submit_to(&service).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Form(FormError::Validation(ValidationError::PasswordMismatch))
    ));
    assert!(service.calls().is_empty());
    assert_eq!(controller.session(), SessionState::Editing);
    assert_eq!(controller.error_message(), Some("Passwords must match"));
}

#[tokio::test]
async fn create_without_password_dispatches_nothing() {
    let service = RecordingService::new();
    let mut controller = AccountFormController::open_create(None);
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));

    let err = controller.submit_to(&service).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Form(FormError::Validation(ValidationError::EmptyPassword))
    ));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn service_error_passes_through() {
    let service = RecordingService::rejecting("email already exists");
    let mut controller = AccountFormController::open_create(None);
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("x".to_string()));

    let err = controller.submit_to(&service).await.unwrap_err();
    match err {
        SubmitError::Service(message) => assert_eq!(message, "email already exists"),
        SubmitError::Form(e) => panic!("unexpected form error: {e}"),
    }
    assert_eq!(service.calls().len(), 1);
    assert!(controller.is_submitted());
}

#[tokio::test]
async fn retry_after_reopen() {
    let failing = RecordingService::rejecting("temporarily unavailable");
    let mut controller = AccountFormController::open_create(None);
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("x".to_string()));

    let err = controller.submit_to(&failing).await.unwrap_err();
    controller.reopen_with_error(err.to_string());
    assert_eq!(controller.error_message(), Some("temporarily unavailable"));

    // Password entries were dropped on submission and must be re-entered.
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("x".to_string()));

    let service = RecordingService::new();
    controller.submit_to(&service).await.unwrap();
    assert_eq!(service.calls().len(), 1);
    assert_eq!(failing.calls().len(), 1);
}

#[tokio::test]
async fn closed_form_never_dispatches() {
    let service = RecordingService::new();
    let mut controller = AccountFormController::open_create(None);
    controller.apply(FormEvent::EmailChanged("a@b.com".to_string()));
    controller.apply(FormEvent::PasswordChanged("x".to_string()));
    controller.apply(FormEvent::ConfirmPasswordChanged("x".to_string()));
    controller.close();

    let err = controller.submit_to(&service).await.unwrap_err();
    assert!(matches!(err, SubmitError::Form(FormError::Closed)));
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn double_submit_dispatches_once() {
    let service = RecordingService::new();
    let existing = Account::new("u1", "a@b.com");
    let mut controller = AccountFormController::open_edit(&existing, None);

    controller.submit_to(&service).await.unwrap();
    assert!(controller.submit_to(&service).await.is_err());
    assert_eq!(service.calls().len(), 1);
}
