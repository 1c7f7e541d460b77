use chrono::Utc;

use crate::dto::messages::NewMessage;
use crate::models::ContactMessage;
use crate::store::Store;
use crate::subscriptions::Change;

impl Store {
    /// Prepend a message under a fresh id, stamped with today's date, so
    /// the collection stays newest-first. Always succeeds.
    pub fn add_message(&mut self, message: NewMessage) {
        let id = self.ids.next_id();
        tracing::debug!(%id, from = %message.email, "contact message received");
        self.messages.insert(
            0,
            ContactMessage {
                id,
                name: message.name,
                email: message.email,
                subject: message.subject,
                message: message.message,
                date: Utc::now().date_naive(),
            },
        );
        self.persist_messages();
        self.emit(Change::Messages);
    }

    /// Unknown ids are a silent no-op.
    pub fn delete_message(&mut self, id: &str) {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        if self.messages.len() == before {
            tracing::debug!(id, "delete for unknown message ignored");
            return;
        }
        tracing::debug!(id, "message deleted");
        self.persist_messages();
        self.emit(Change::Messages);
    }
}
