use crate::dto::products::{NewProduct, ProductPatch};
use crate::models::Product;
use crate::query::ProductFilter;
use crate::store::Store;
use crate::subscriptions::Change;

impl Store {
    /// Append a product under a freshly assigned id. Always succeeds.
    pub fn add_product(&mut self, product: NewProduct) {
        let id = self.ids.next_id();
        tracing::debug!(%id, name = %product.name, "product added");
        self.products.push(Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            image: product.image,
            in_stock: product.in_stock,
        });
        self.persist_products();
        self.emit(Change::Products);
    }

    /// Merge the supplied fields onto the matching product. Unknown ids are
    /// a silent no-op and the id itself never changes.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(id, "update for unknown product ignored");
            return;
        };
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        self.persist_products();
        self.emit(Change::Products);
    }

    /// Remove a product and, in the same step, its favorite-set entry so no
    /// dangling id survives. Unknown ids are a silent no-op.
    pub fn delete_product(&mut self, id: &str) {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        if self.products.len() == before {
            tracing::debug!(id, "delete for unknown product ignored");
            return;
        }
        tracing::debug!(id, "product deleted");
        self.persist_products();
        self.emit(Change::Products);

        if self.favorites.iter().any(|fav| fav == id) {
            self.favorites.retain(|fav| fav != id);
            self.persist_favorites();
            self.emit(Change::Favorites);
        }
    }

    pub fn filter_products(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }
}
