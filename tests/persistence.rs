use std::fs;

use boutique_store::dto::messages::NewMessage;
use boutique_store::dto::products::NewProduct;
use boutique_store::models::{Product, Role};
use boutique_store::{Store, StoreConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boutique_store=debug".into()),
        )
        .try_init();
}

fn config_for(dir: &tempfile::TempDir, seed: bool) -> StoreConfig {
    StoreConfig {
        data_dir: dir.path().to_path_buf(),
        seed_on_first_run: seed,
    }
}

fn sample_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "A product for testing".to_string(),
        price: 19.99,
        category: "Clothing".to_string(),
        image: "x".to_string(),
        in_stock: true,
    }
}

#[test]
fn collections_round_trip_across_store_instances() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let config = config_for(&dir, false);

    let mut store = Store::open(&config)?;
    store.add_product(sample_product("Shirt"));
    store.add_product(sample_product("Scarf"));
    let favorite_id = store.products()[1].id.clone();
    store.toggle_favorite(&favorite_id);
    store.add_message(NewMessage {
        name: "Bob".to_string(),
        email: "b@x.com".to_string(),
        subject: "Hi".to_string(),
        message: "Hello".to_string(),
    });
    let products = store.products().to_vec();
    let messages = store.messages().to_vec();
    let favorites = store.favorites().to_vec();
    drop(store);

    let reopened = Store::open(&config)?;
    assert_eq!(reopened.products(), products.as_slice());
    assert_eq!(reopened.messages(), messages.as_slice());
    assert_eq!(reopened.favorites(), favorites.as_slice());
    Ok(())
}

#[test]
fn write_through_lands_in_the_expected_key() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = Store::open(&config_for(&dir, false))?;

    store.add_product(NewProduct {
        name: "Shirt".to_string(),
        description: "Plain cotton".to_string(),
        price: 19.99,
        category: "Clothing".to_string(),
        image: "x".to_string(),
        in_stock: true,
    });

    let raw = fs::read_to_string(dir.path().join("products.json"))?;
    let stored: Vec<Product> = serde_json::from_str(&raw)?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Shirt");
    assert_eq!(stored[0].price, 19.99);
    assert!(stored[0].in_stock);
    assert_eq!(stored[0].id, store.products()[0].id);

    // Wire fields are camelCase in the stored JSON.
    assert!(raw.contains("\"inStock\""));
    Ok(())
}

#[test]
fn emptied_collections_stay_empty_after_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_for(&dir, true);

    let mut store = Store::open(&config)?;
    assert!(!store.products().is_empty());
    let ids: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();
    for id in &ids {
        store.delete_product(id);
    }
    assert!(store.products().is_empty());
    drop(store);

    let reopened = Store::open(&config)?;
    assert!(
        reopened.products().is_empty(),
        "an emptied catalog must not resurrect the seed data"
    );
    Ok(())
}

#[test]
fn unreadable_stored_data_falls_back_to_the_seed() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    fs::write(dir.path().join("products.json"), "{not json")?;
    fs::write(dir.path().join("favorites.json"), "also broken")?;

    let store = Store::open(&config_for(&dir, true))?;
    assert_eq!(store.products(), boutique_store::seed::initial_products());
    assert!(store.favorites().is_empty());
    Ok(())
}

#[test]
fn session_key_exists_exactly_while_logged_in() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_for(&dir, false);
    let session_path = dir.path().join("currentUser.json");

    let mut store = Store::open(&config)?;
    assert!(!session_path.exists());

    store.login("alice@example.com", Role::Admin);
    assert!(session_path.exists());
    drop(store);

    let mut reopened = Store::open(&config)?;
    let user = reopened.current_user().cloned();
    assert_eq!(user.as_ref().map(|u| u.name.as_str()), Some("alice"));
    assert_eq!(user.map(|u| u.role), Some(Role::Admin));

    reopened.logout();
    assert!(!session_path.exists());
    Ok(())
}

#[test]
fn hydrated_ids_never_collide_with_fresh_ones() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_for(&dir, true);

    let mut store = Store::open(&config)?;
    store.add_product(sample_product("Shirt"));
    drop(store);

    let mut reopened = Store::open(&config)?;
    reopened.add_product(sample_product("Scarf"));
    let ids: Vec<&str> = reopened.products().iter().map(|p| p.id.as_str()).collect();
    let unique: std::collections::HashSet<&&str> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    Ok(())
}
