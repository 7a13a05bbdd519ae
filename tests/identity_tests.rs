mod common;
use common::temp_home;
use rattendance::errors::{AppError, AppResult};
use rattendance::identity::{
    DEMO_USER_ID, IdentityProvider, IdentityResolver, SqliteIdentityProvider, UserIdentity,
};
use rattendance::storage::LocalStorage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Provider answering from fixed results and counting calls.
struct StubProvider {
    token_result: Option<String>,
    anonymous_ok: bool,
    calls: Cell<u32>,
}

impl IdentityProvider for StubProvider {
    fn sign_in_with_token(&self, _token: &str) -> AppResult<UserIdentity> {
        self.calls.set(self.calls.get() + 1);
        match &self.token_result {
            Some(uid) => Ok(UserIdentity {
                uid: uid.clone(),
                is_anonymous: false,
            }),
            None => Err(AppError::Identity("token rejected".into())),
        }
    }

    fn sign_in_anonymously(&self) -> AppResult<UserIdentity> {
        self.calls.set(self.calls.get() + 1);
        if self.anonymous_ok {
            Ok(UserIdentity {
                uid: "anon-1".into(),
                is_anonymous: true,
            })
        } else {
            Err(AppError::Identity("service down".into()))
        }
    }
}

fn stub(token_result: Option<&str>, anonymous_ok: bool) -> StubProvider {
    StubProvider {
        token_result: token_result.map(String::from),
        anonymous_ok,
        calls: Cell::new(0),
    }
}

#[test]
fn test_no_provider_resolves_demo_user() {
    let mut resolver = IdentityResolver::new();
    let id = resolver.resolve(None, Some("ignored"));
    assert_eq!(id.uid, DEMO_USER_ID);
    assert_eq!(resolver.current(), Some(&id));
}

#[test]
fn test_token_wins_over_anonymous() {
    let provider = stub(Some("teacher-7"), true);
    let mut resolver = IdentityResolver::new();

    let id = resolver.resolve(Some(&provider), Some("tok"));
    assert_eq!(id.uid, "teacher-7");
    assert!(!id.is_anonymous);
}

#[test]
fn test_anonymous_without_token() {
    let provider = stub(None, true);
    let mut resolver = IdentityResolver::new();
    assert_eq!(resolver.resolve(Some(&provider), None).uid, "anon-1");
}

#[test]
fn test_provider_failure_falls_back_to_demo_user() {
    let provider = stub(None, false);
    let mut resolver = IdentityResolver::new();
    assert_eq!(resolver.resolve(Some(&provider), None).uid, DEMO_USER_ID);

    let mut resolver = IdentityResolver::new();
    assert_eq!(
        resolver.resolve(Some(&provider), Some("bad")).uid,
        DEMO_USER_ID
    );
}

#[test]
fn test_resolution_happens_once() {
    let provider = stub(None, true);
    let mut resolver = IdentityResolver::new();

    resolver.resolve(Some(&provider), None);
    resolver.resolve(Some(&provider), None);
    assert_eq!(provider.calls.get(), 1);
}

#[test]
fn test_listeners_see_changes_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut resolver = IdentityResolver::new();
    resolver.on_change(Box::new(move |id| sink.borrow_mut().push(id.uid.clone())));

    resolver.resolve(None, None);
    resolver.update(UserIdentity::demo());
    resolver.update(UserIdentity {
        uid: "refreshed".into(),
        is_anonymous: false,
    });

    assert_eq!(*seen.borrow(), vec![DEMO_USER_ID.to_string(), "refreshed".to_string()]);
}

// ------------------------------------------------
// Document store identity service
// ------------------------------------------------

#[test]
fn test_issued_token_signs_in() {
    let home = temp_home("identity_token");
    let provider =
        SqliteIdentityProvider::open(&home.join("docs.sqlite"), LocalStorage::new(&home)).unwrap();

    let token = provider.issue_token("teacher-ce").unwrap();
    let id = provider.sign_in_with_token(&token).unwrap();
    assert_eq!(id.uid, "teacher-ce");
    assert!(!id.is_anonymous);

    assert!(matches!(
        provider.sign_in_with_token("nope"),
        Err(AppError::Identity(_))
    ));
    assert!(provider.issue_token("  ").is_err());
}

#[test]
fn test_anonymous_session_is_reused_between_invocations() {
    let home = temp_home("identity_anonymous");
    let db = home.join("docs.sqlite");

    let first = SqliteIdentityProvider::open(&db, LocalStorage::new(&home))
        .unwrap()
        .sign_in_anonymously()
        .unwrap();
    let second = SqliteIdentityProvider::open(&db, LocalStorage::new(&home))
        .unwrap()
        .sign_in_anonymously()
        .unwrap();

    assert!(first.is_anonymous);
    assert_eq!(first, second);

    let elsewhere = temp_home("identity_anonymous_other");
    let third = SqliteIdentityProvider::open(&db, LocalStorage::new(&elsewhere))
        .unwrap()
        .sign_in_anonymously()
        .unwrap();
    assert_ne!(first.uid, third.uid);
}
