//! The single source of truth for products, messages, favorites, and the
//! current session. Every mutation updates the in-memory collection, writes
//! the whole collection back through the storage backend, and then notifies
//! subscribers. All failure modes on the read side are absorbed: unreadable
//! durable data falls back to defaults, unknown ids are silent no-ops.

mod favorites;
mod messages;
mod products;
mod session;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::ids::IdGenerator;
use crate::models::{ContactMessage, Product, StoreStats, User};
use crate::seed;
use crate::storage::{FileBackend, StorageBackend, keys};
use crate::subscriptions::{Change, SubscriptionId, Subscriptions};

pub struct Store {
    products: Vec<Product>,
    messages: Vec<ContactMessage>,
    favorites: Vec<String>,
    current_user: Option<User>,
    backend: Box<dyn StorageBackend>,
    ids: IdGenerator,
    subscriptions: Subscriptions,
}

impl Store {
    /// Open the store over a file backend rooted at the configured data
    /// directory.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let backend = FileBackend::open(&config.data_dir)?;
        Ok(Self::with_backend(
            Box::new(backend),
            config.seed_on_first_run,
        ))
    }

    /// Hydrate each collection independently from the backend. A present,
    /// parseable value wins; otherwise products and messages fall back to
    /// the bundled seed data (when `seed` is set), favorites to empty and
    /// the session to absent. Hydration happens once, here.
    pub fn with_backend(backend: Box<dyn StorageBackend>, seed: bool) -> Self {
        let products: Vec<Product> = Self::load(backend.as_ref(), keys::PRODUCTS)
            .unwrap_or_else(|| if seed { seed::initial_products() } else { Vec::new() });
        let messages: Vec<ContactMessage> = Self::load(backend.as_ref(), keys::MESSAGES)
            .unwrap_or_else(|| if seed { seed::initial_messages() } else { Vec::new() });
        let favorites: Vec<String> =
            Self::load(backend.as_ref(), keys::FAVORITES).unwrap_or_default();
        let current_user: Option<User> = Self::load(backend.as_ref(), keys::CURRENT_USER);

        let mut ids = IdGenerator::new();
        for product in &products {
            ids.observe(&product.id);
        }
        for message in &messages {
            ids.observe(&message.id);
        }
        if let Some(user) = &current_user {
            ids.observe(&user.id);
        }

        tracing::debug!(
            products = products.len(),
            messages = messages.len(),
            favorites = favorites.len(),
            session = current_user.is_some(),
            "store hydrated"
        );

        Self {
            products,
            messages,
            favorites,
            current_user,
            backend,
            ids,
            subscriptions: Subscriptions::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Leading slice of the catalog, as the landing page shows it.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_products: self.products.len(),
            in_stock: self.products.iter().filter(|p| p.in_stock).count(),
            messages: self.messages.len(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) -> SubscriptionId {
        self.subscriptions.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn load<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Option<T> {
        let raw = backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored value unreadable, falling back to defaults");
                None
            }
        }
    }

    /// Write-through of one whole collection. A failed write is logged and
    /// otherwise absorbed; the in-memory state keeps the mutation.
    fn persist(backend: &mut dyn StorageBackend, key: &str, value: &impl Serialize) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(err) = backend.set(key, &json) {
                    tracing::warn!(key, error = %err, "failed to persist collection");
                }
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to encode collection");
            }
        }
    }

    fn persist_products(&mut self) {
        Self::persist(self.backend.as_mut(), keys::PRODUCTS, &self.products);
    }

    fn persist_messages(&mut self) {
        Self::persist(self.backend.as_mut(), keys::MESSAGES, &self.messages);
    }

    fn persist_favorites(&mut self) {
        Self::persist(self.backend.as_mut(), keys::FAVORITES, &self.favorites);
    }

    /// Session is written when present and removed from the namespace when
    /// absent.
    fn persist_session(&mut self) {
        let backend = self.backend.as_mut();
        match &self.current_user {
            Some(user) => Self::persist(backend, keys::CURRENT_USER, user),
            None => {
                if let Err(err) = backend.remove(keys::CURRENT_USER) {
                    tracing::warn!(key = keys::CURRENT_USER, error = %err, "failed to clear stored session");
                }
            }
        }
    }

    fn emit(&mut self, change: Change) {
        self.subscriptions.emit(change);
    }
}
