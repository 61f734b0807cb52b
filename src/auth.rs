use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::model::User;
use crate::store::KeyValueStore;

pub const USER_KEY: &str = "user";
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated { user: User },
    Rejected { reason: String },
}

/// Simulated sign-in. No credentials are checked beyond basic shape.
#[derive(Debug, Clone)]
pub struct Auth {
    login_delay: Duration,
    signup_delay: Duration,
}

impl Default for Auth {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(1000),
            signup_delay: Duration::from_millis(1500),
        }
    }
}

impl Auth {
    pub fn new(login_delay: Duration, signup_delay: Duration) -> Self {
        Self {
            login_delay,
            signup_delay,
        }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn login(
        &self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
    ) -> Result<AuthOutcome> {
        pause(self.login_delay);
        if !credentials_ok(email, password) {
            log::info!("login rejected for {:?}", email);
            return Ok(rejected("Invalid credentials"));
        }
        let user = User {
            id: "1".to_string(),
            email: email.to_string(),
            name: Some(email.split('@').next().unwrap_or(email).to_string()),
            avatar: None,
        };
        remember(store, user)
    }

    pub fn login_with_google(&self, store: &mut dyn KeyValueStore) -> Result<AuthOutcome> {
        pause(self.login_delay);
        let user = User {
            id: "2".to_string(),
            email: "user@example.com".to_string(),
            name: Some("Demo User".to_string()),
            avatar: Some("https://i.pravatar.cc/150?img=68".to_string()),
        };
        remember(store, user)
    }

    pub fn signup(
        &self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthOutcome> {
        pause(self.signup_delay);
        if !credentials_ok(email, password) {
            log::info!("signup rejected for {:?}", email);
            return Ok(rejected("Invalid signup data"));
        }
        let user = User {
            id: "3".to_string(),
            email: email.to_string(),
            name: Some(name.to_string()),
            avatar: None,
        };
        remember(store, user)
    }

    pub fn logout(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        log::info!("logged out");
        store.remove(USER_KEY)
    }

    /// The remembered user, if any. An unreadable record is discarded.
    pub fn current_user(&self, store: &mut dyn KeyValueStore) -> Option<User> {
        let raw = store.get(USER_KEY)?;
        match serde_yaml::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("failed to parse stored user data: {}", e);
                if let Err(e) = store.remove(USER_KEY) {
                    log::warn!("cannot drop stored user data: {}", e);
                }
                None
            }
        }
    }
}

fn credentials_ok(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && password.chars().count() >= MIN_PASSWORD_LEN
}

fn rejected(reason: &str) -> AuthOutcome {
    AuthOutcome::Rejected {
        reason: reason.to_string(),
    }
}

fn remember(store: &mut dyn KeyValueStore, user: User) -> Result<AuthOutcome> {
    let yaml =
        serde_yaml::to_string(&user).map_err(|e| Error::yaml("Cannot serialize user", e))?;
    store.set(USER_KEY, &yaml)?;
    log::info!("signed in as {} (id {})", user.email, user.id);
    Ok(AuthOutcome::Authenticated { user })
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
