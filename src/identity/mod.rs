//! Identity resolution: obtains an opaque user id from an identity
//! provider, falling back to a fixed local identity.

pub mod provider;

pub use provider::SqliteIdentityProvider;

use crate::errors::AppResult;

/// Identifier used when no identity provider is reachable.
pub const DEMO_USER_ID: &str = "demo-user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub uid: String,
    pub is_anonymous: bool,
}

impl UserIdentity {
    pub fn demo() -> Self {
        Self {
            uid: DEMO_USER_ID.to_string(),
            is_anonymous: true,
        }
    }
}

/// Source of user identities (the remote auth service).
pub trait IdentityProvider {
    /// Exchange a pre-issued bootstrap token for its identity.
    fn sign_in_with_token(&self, token: &str) -> AppResult<UserIdentity>;

    /// Obtain an anonymous identity.
    fn sign_in_anonymously(&self) -> AppResult<UserIdentity>;
}

type IdentityListener = Box<dyn FnMut(&UserIdentity)>;

/// Resolves the session identity once and reports later changes.
#[derive(Default)]
pub struct IdentityResolver {
    current: Option<UserIdentity>,
    listeners: Vec<IdentityListener>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the identity for this session.
    ///
    /// Order: bootstrap token → anonymous sign-in → local `demo-user`.
    /// Only the first call talks to the provider; later calls return the
    /// identity already resolved.
    pub fn resolve(
        &mut self,
        provider: Option<&dyn IdentityProvider>,
        bootstrap_token: Option<&str>,
    ) -> UserIdentity {
        if let Some(current) = &self.current {
            return current.clone();
        }

        let identity = match provider {
            None => {
                log::info!("Identity provider not available - running in offline mode");
                UserIdentity::demo()
            }
            Some(p) => {
                let attempt = match bootstrap_token {
                    Some(token) => p.sign_in_with_token(token),
                    None => p.sign_in_anonymously(),
                };
                attempt.unwrap_or_else(|e| {
                    log::error!("Auth failed: {e}");
                    UserIdentity::demo()
                })
            }
        };

        self.update(identity.clone());
        identity
    }

    pub fn current(&self) -> Option<&UserIdentity> {
        self.current.as_ref()
    }

    /// Register a listener for identity changes (e.g. token refresh).
    pub fn on_change(&mut self, listener: IdentityListener) {
        self.listeners.push(listener);
    }

    /// Replace the current identity and notify listeners.
    pub fn update(&mut self, identity: UserIdentity) {
        if self.current.as_ref() == Some(&identity) {
            return;
        }
        for l in self.listeners.iter_mut() {
            l(&identity);
        }
        self.current = Some(identity);
    }
}
