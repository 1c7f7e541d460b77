use crate::models::Product;
use crate::store::Store;
use crate::subscriptions::Change;

impl Store {
    /// Remove the id from the favorite set if present, otherwise append it.
    /// Only ids of existing products may be added, so the set never holds a
    /// dangling reference; toggling off is always honored. Two toggles in a
    /// row restore the prior membership.
    pub fn toggle_favorite(&mut self, product_id: &str) {
        if let Some(pos) = self.favorites.iter().position(|fav| fav == product_id) {
            self.favorites.remove(pos);
        } else {
            if !self.products.iter().any(|p| p.id == product_id) {
                tracing::debug!(product_id, "favorite toggle for unknown product ignored");
                return;
            }
            self.favorites.push(product_id.to_string());
        }
        self.persist_favorites();
        self.emit(Change::Favorites);
    }

    pub fn is_favorite(&self, product_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == product_id)
    }

    /// Favorited products in catalog order, as the favorites page renders
    /// them.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.favorites.iter().any(|fav| *fav == product.id))
            .collect()
    }
}
