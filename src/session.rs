//! Session state - the logged-in user, shared read-only with the UI store

use tokio::sync::watch;

use crate::collaborators::SessionContext;
use crate::models::User;

/// Current user, observable by any number of readers
pub struct SessionState {
    user_tx: watch::Sender<Option<User>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let (user_tx, _) = watch::channel(None);
        SessionState { user_tx }
    }

    pub fn login(&self, user: User) {
        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        self.user_tx.send_replace(Some(user));
    }

    pub fn logout(&self) {
        self.user_tx.send_replace(None);
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.user_tx.subscribe()
    }
}

impl SessionContext for SessionState {
    fn current_user(&self) -> Option<User> {
        self.user_tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let session = SessionState::new();
        assert_eq!(session.current_user(), None);
        session.login(User::new("person-1", "client"));
        assert_eq!(session.current_user().map(|u| u.role), Some("client".to_string()));
        session.logout();
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_subscribers_see_changes() {
        let session = SessionState::new();
        let rx = session.subscribe();
        session.login(User::new("person-2", "admin"));
        assert_eq!(rx.borrow().as_ref().map(|u| u.id.as_str()), Some("person-2"));
    }
}
