use estrella_shared::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered traveler. Immutable after registration and never deleted;
/// the password is compared in the clear (demo scope) but masked in Debug
/// output via the Secret wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub password: Secret<String>,
}

impl User {
    pub fn new(login: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            login,
            password: Secret::new(password),
        }
    }
}

/// The active session. Its presence is the sole authorization gate for all
/// ticket operations; at most one is persisted per running instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "id")]
    pub user_id: Uuid,
    pub login: String,
}

impl Session {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            login: user.login.clone(),
        }
    }
}
