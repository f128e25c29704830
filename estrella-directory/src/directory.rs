use crate::models::{Session, User};
use estrella_store::{read_or_default, write_record, StorageGateway, StorageKey};

/// Registers and authenticates travelers against the persisted user set and
/// issues the session that gates every ticket operation.
pub struct AccountDirectory;

impl AccountDirectory {
    /// Create an account. Fails if the login is already taken; on success
    /// the new user is persisted and a session is established immediately.
    pub fn register<G>(
        gateway: &mut G,
        login: &str,
        password: &str,
    ) -> Result<Session, DirectoryError>
    where
        G: StorageGateway + ?Sized,
    {
        if login.is_empty() || password.is_empty() {
            return Err(DirectoryError::EmptyCredentials);
        }

        let mut users: Vec<User> = read_or_default(gateway, StorageKey::Users);
        if users.iter().any(|u| u.login == login) {
            return Err(DirectoryError::AlreadyExists(login.to_string()));
        }

        let user = User::new(login.to_string(), password.to_string());
        let session = Session::for_user(&user);
        users.push(user);

        write_record(gateway, StorageKey::Users, &users);
        write_record(gateway, StorageKey::Session, &session);
        tracing::info!("Registered account: {}", login);

        Ok(session)
    }

    /// Authenticate against the stored user set; both fields must match
    /// exactly. Establishes and persists a fresh session on success.
    pub fn authenticate<G>(
        gateway: &mut G,
        login: &str,
        password: &str,
    ) -> Result<Session, DirectoryError>
    where
        G: StorageGateway + ?Sized,
    {
        if login.is_empty() || password.is_empty() {
            return Err(DirectoryError::EmptyCredentials);
        }

        let users: Vec<User> = read_or_default(gateway, StorageKey::Users);
        let user = users
            .iter()
            .find(|u| u.login == login && u.password.expose() == password)
            .ok_or(DirectoryError::InvalidCredentials)?;

        let session = Session::for_user(user);
        write_record(gateway, StorageKey::Session, &session);
        tracing::info!("Session opened: {}", login);

        Ok(session)
    }

    /// The persisted session, if any. A stale or malformed session record
    /// reads as absent.
    pub fn current_session<G>(gateway: &G) -> Option<Session>
    where
        G: StorageGateway + ?Sized,
    {
        read_or_default(gateway, StorageKey::Session)
    }

    /// Clear the active session. Ending an absent session is a no-op.
    pub fn end_session<G>(gateway: &mut G)
    where
        G: StorageGateway + ?Sized,
    {
        gateway.remove(StorageKey::Session);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("Login and password must not be empty")]
    EmptyCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;
    use estrella_store::MemoryGateway;

    #[test]
    fn test_register_then_authenticate() {
        let mut gateway = MemoryGateway::new();

        let session = AccountDirectory::register(&mut gateway, "alice", "pw1").unwrap();
        assert_eq!(session.login, "alice");

        let again = AccountDirectory::authenticate(&mut gateway, "alice", "pw1").unwrap();
        assert_eq!(again.user_id, session.user_id);
    }

    #[test]
    fn test_duplicate_login_rejected() {
        let mut gateway = MemoryGateway::new();

        AccountDirectory::register(&mut gateway, "alice", "pw1").unwrap();
        let result = AccountDirectory::register(&mut gateway, "alice", "other");

        assert!(matches!(result, Err(DirectoryError::AlreadyExists(_))));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let mut gateway = MemoryGateway::new();

        AccountDirectory::register(&mut gateway, "alice", "pw1").unwrap();
        AccountDirectory::end_session(&mut gateway);

        let result = AccountDirectory::authenticate(&mut gateway, "alice", "wrong");
        assert!(matches!(result, Err(DirectoryError::InvalidCredentials)));

        let unknown = AccountDirectory::authenticate(&mut gateway, "bob", "pw1");
        assert!(matches!(unknown, Err(DirectoryError::InvalidCredentials)));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut gateway = MemoryGateway::new();

        assert!(matches!(
            AccountDirectory::register(&mut gateway, "", "pw1"),
            Err(DirectoryError::EmptyCredentials)
        ));
        assert!(matches!(
            AccountDirectory::authenticate(&mut gateway, "alice", ""),
            Err(DirectoryError::EmptyCredentials)
        ));
    }

    #[test]
    fn test_session_lifecycle() {
        let mut gateway = MemoryGateway::new();
        assert!(AccountDirectory::current_session(&gateway).is_none());

        let session = AccountDirectory::register(&mut gateway, "alice", "pw1").unwrap();
        assert_eq!(AccountDirectory::current_session(&gateway), Some(session));

        AccountDirectory::end_session(&mut gateway);
        assert!(AccountDirectory::current_session(&gateway).is_none());

        // Idempotent: ending an absent session is fine
        AccountDirectory::end_session(&mut gateway);
        assert!(AccountDirectory::current_session(&gateway).is_none());
    }

    #[test]
    fn test_malformed_user_set_reads_as_empty() {
        let mut gateway = MemoryGateway::new();
        gateway.write(
            estrella_store::StorageKey::Users,
            serde_json::json!("corrupted"),
        );

        let result = AccountDirectory::authenticate(&mut gateway, "alice", "pw1");
        assert!(matches!(result, Err(DirectoryError::InvalidCredentials)));

        // Registration still proceeds over the empty fallback
        assert!(AccountDirectory::register(&mut gateway, "alice", "pw1").is_ok());
    }
}
