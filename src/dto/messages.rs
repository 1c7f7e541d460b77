use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
