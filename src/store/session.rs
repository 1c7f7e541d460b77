use crate::models::{Role, User};
use crate::store::Store;
use crate::subscriptions::Change;

impl Store {
    /// Replace the session wholesale with a user derived from the email:
    /// the name is the local-part, the role is stored as supplied. Nothing
    /// is validated or verified; this unconditionally succeeds.
    pub fn login(&mut self, email: &str, role: Role) {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: self.ids.next_id(),
            name,
            email: email.to_string(),
            role,
        };
        tracing::debug!(email = %user.email, role = ?user.role, "session started");
        self.current_user = Some(user);
        self.persist_session();
        self.emit(Change::Session);
    }

    /// Clear the session and drop it from durable storage. A no-op when no
    /// session exists.
    pub fn logout(&mut self) {
        if self.current_user.take().is_some() {
            tracing::debug!("session ended");
            self.persist_session();
            self.emit(Change::Session);
        }
    }
}
