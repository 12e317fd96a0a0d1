//! Tests for MemStorage
//!
//! These tests verify:
//! - Create operations assign ids, defaults and timestamps
//! - Text fields are stored as given, blank included
//! - Facade reads delegate to the query layer
//! - Sample data seeding
//! - Concurrent creates never share an id

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use agrimarket::clock::ManualClock;
use agrimarket::model::{Category, NewContact, NewProduct, NewUser, Price, Role};
use agrimarket::{Config, MemStorage, ProductFilter, Storage};
use chrono::{DateTime, Duration, Utc};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_empty_storage() -> MemStorage {
    let config = Config::builder().seed_sample_data(false).build();
    MemStorage::with_clock(config, Arc::new(ManualClock::ticking())).unwrap()
}

fn setup_seeded_storage() -> MemStorage {
    MemStorage::with_clock(Config::default(), Arc::new(ManualClock::ticking())).unwrap()
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "plaintext".to_string(),
        role: Role::Farmer,
        first_name: format!("{}-first", username),
        last_name: "Farmer".to_string(),
        phone: "+92 300 0000000".to_string(),
        location: "Faisalabad".to_string(),
        profile_image_url: None,
    }
}

fn new_product(title: &str, category: Category) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        description: format!("Fresh {}", title),
        price: Price::parse("100").unwrap(),
        quantity: "50kg".to_string(),
        category,
        location: "Faisalabad".to_string(),
        image_url: None,
    }
}

fn new_contact(product_id: u32) -> NewContact {
    NewContact {
        product_id,
        buyer_name: "Bilal".to_string(),
        buyer_email: "bilal@example.com".to_string(),
        buyer_phone: "+92 321 0000000".to_string(),
        message: "Is this still available?".to_string(),
    }
}

// =============================================================================
// Open / Seed Tests
// =============================================================================

#[test]
fn test_open_without_seed_is_empty() {
    let storage = setup_empty_storage();

    assert_eq!(storage.user_count(), 0);
    assert_eq!(storage.product_count(), 0);
    assert_eq!(storage.contact_count(), 0);
    assert!(!storage.config().seed_sample_data);
    assert!(storage.get_products(&ProductFilter::new()).unwrap().is_empty());
}

#[test]
fn test_open_with_seed_inserts_sample_catalog() {
    let storage = setup_seeded_storage();

    assert_eq!(storage.user_count(), 2);
    assert_eq!(storage.product_count(), 4);
    assert_eq!(storage.contact_count(), 0);

    let ali = storage.get_user_by_username("ali_farmer").unwrap().unwrap();
    assert_eq!(ali.id, 1);
    assert_eq!(ali.role, Role::Farmer);
    let fatima = storage.get_user_by_email("fatima@example.com").unwrap().unwrap();
    assert_eq!(fatima.id, 2);
    assert_eq!(fatima.role, Role::Trader);

    let listings = storage.get_products(&ProductFilter::new()).unwrap();
    let titles: Vec<&str> = listings.iter().map(|p| p.product.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Wheat Flour", "Sweet Mangoes", "Fresh Tomatoes", "Premium Basmati Rice"]
    );
}

#[test]
fn test_seeded_grains_and_search() {
    let storage = setup_seeded_storage();

    let grains = storage
        .get_products(&ProductFilter::new().with_category("grains"))
        .unwrap();
    assert_eq!(grains.len(), 2);

    let tomatoes = storage
        .get_products(&ProductFilter::new().with_search("TOMATO"))
        .unwrap();
    assert_eq!(tomatoes.len(), 1);
    assert_eq!(tomatoes[0].product.title, "Fresh Tomatoes");
    assert_eq!(tomatoes[0].seller.first_name, "Ali");
}

#[test]
fn test_seeded_ids_continue_after_sample_data() {
    let storage = setup_seeded_storage();

    let user = storage.create_user(new_user("newcomer")).unwrap();
    let product = storage.create_product(new_product("Corn", Category::Grains), user.id).unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(product.id, 5);
}

#[test]
fn test_open_uses_system_clock() {
    let before = Utc::now();
    let storage = MemStorage::open(Config::default()).unwrap();
    let after = Utc::now();

    let ali = storage.get_user(1).unwrap().unwrap();
    assert!(ali.created_at >= before && ali.created_at <= after);
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_user_assigns_sequential_ids() {
    let storage = setup_empty_storage();

    let ids: Vec<u32> = (0..5)
        .map(|i| storage.create_user(new_user(&format!("user{}", i))).unwrap().id)
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_create_user_returns_full_record() {
    let storage = setup_empty_storage();

    let user = storage.create_user(new_user("ali")).unwrap();

    assert_eq!(user.password, "plaintext");
    assert_eq!(user.profile_image_url, None);
    assert_eq!(user.created_at, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(storage.get_user(user.id).unwrap(), Some(user));
}

#[test]
fn test_create_user_empty_image_url_becomes_none() {
    let storage = setup_empty_storage();

    let mut with_empty = new_user("empty");
    with_empty.profile_image_url = Some(String::new());
    let mut with_url = new_user("url");
    with_url.profile_image_url = Some("https://img.example.com/a.png".to_string());

    assert_eq!(storage.create_user(with_empty).unwrap().profile_image_url, None);
    assert_eq!(
        storage.create_user(with_url).unwrap().profile_image_url.as_deref(),
        Some("https://img.example.com/a.png")
    );
}

#[test]
fn test_create_stores_blank_text_fields() {
    let storage = setup_empty_storage();

    let mut user = new_user("ali");
    user.phone = String::new();
    let user = storage.create_user(user).unwrap();
    assert_eq!(user.phone, "");
    assert_eq!(storage.get_user(user.id).unwrap(), Some(user.clone()));

    let mut product = new_product("", Category::Other);
    product.description = "  ".to_string();
    let product = storage.create_product(product, user.id).unwrap();
    assert_eq!(product.title, "");
    assert_eq!(storage.get_product(product.id).unwrap().unwrap().product, product);

    let mut contact = new_contact(product.id);
    contact.message = " ".to_string();
    let contact = storage.create_contact(contact).unwrap();
    assert_eq!(contact.message, " ");
    assert_eq!(storage.get_contacts_by_product(product.id).unwrap(), vec![contact]);
}

#[test]
fn test_create_product_forces_active_and_seller() {
    let storage = setup_empty_storage();
    let seller = storage.create_user(new_user("ali")).unwrap();

    let mut payload = new_product("Rice", Category::Grains);
    payload.image_url = Some(String::new());
    let product = storage.create_product(payload, seller.id).unwrap();

    assert_eq!(product.id, 1);
    assert_eq!(product.seller_id, seller.id);
    assert!(product.is_active);
    assert_eq!(product.image_url, None);
    assert_eq!(storage.product_count(), 1);
}

#[test]
fn test_create_product_with_missing_seller_is_stored_but_hidden() {
    let storage = setup_empty_storage();

    let product = storage.create_product(new_product("Orphan", Category::Other), 77).unwrap();

    assert_eq!(storage.product_count(), 1);
    assert_eq!(storage.get_product(product.id).unwrap(), None);
    assert!(storage.get_products(&ProductFilter::new()).unwrap().is_empty());
    assert_eq!(storage.get_products_by_seller(77).unwrap(), vec![product]);
}

#[test]
fn test_create_contact_for_missing_product() {
    let storage = setup_empty_storage();

    let contact = storage.create_contact(new_contact(5)).unwrap();

    assert_eq!(contact.id, 1);
    assert_eq!(storage.get_contacts_by_product(5).unwrap(), vec![contact]);
    assert!(storage.get_contacts_by_product(6).unwrap().is_empty());
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_get_missing_records_is_none_not_error() {
    let storage = setup_empty_storage();

    assert_eq!(storage.get_user(1).unwrap(), None);
    assert_eq!(storage.get_user_by_username("ghost").unwrap(), None);
    assert_eq!(storage.get_user_by_email("ghost@example.com").unwrap(), None);
    assert_eq!(storage.get_product(1).unwrap(), None);
    assert!(storage.get_products_by_seller(1).unwrap().is_empty());
    assert!(storage.get_contacts_by_product(1).unwrap().is_empty());
}

#[test]
fn test_get_product_twice_returns_equal_values() {
    let storage = setup_empty_storage();
    let seller = storage.create_user(new_user("ali")).unwrap();
    let product = storage.create_product(new_product("Rice", Category::Grains), seller.id).unwrap();

    let first = storage.get_product(product.id).unwrap().unwrap();
    let second = storage.get_product(product.id).unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.product, product);
    assert_eq!(first.seller.first_name, seller.first_name);
}

#[test]
fn test_frozen_clock_keeps_insertion_order() {
    let clock = Arc::new(ManualClock::frozen(DateTime::<Utc>::UNIX_EPOCH));
    let config = Config::builder().seed_sample_data(false).build();
    let storage = MemStorage::with_clock(config, clock).unwrap();
    let seller = storage.create_user(new_user("ali")).unwrap();

    for title in ["A", "B", "C"] {
        storage.create_product(new_product(title, Category::Grains), seller.id).unwrap();
    }

    let listings = storage.get_products(&ProductFilter::new()).unwrap();
    let titles: Vec<&str> = listings.iter().map(|p| p.product.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn test_manual_clock_advance_orders_contacts() {
    let clock = Arc::new(ManualClock::new(DateTime::<Utc>::UNIX_EPOCH, Duration::zero()));
    let config = Config::builder().seed_sample_data(false).build();
    let storage = MemStorage::with_clock(config, clock.clone()).unwrap();

    let early = storage.create_contact(new_contact(1)).unwrap();
    clock.advance(Duration::minutes(5));
    let late = storage.create_contact(new_contact(1)).unwrap();

    let contacts = storage.get_contacts_by_product(1).unwrap();
    assert_eq!(contacts, vec![late, early]);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_creates_assign_unique_ids() {
    let storage: Arc<dyn Storage> = Arc::new(setup_empty_storage());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| {
                        storage
                            .create_user(new_user(&format!("t{}-u{}", t, i)))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<u32>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    assert_eq!(ids.len(), threads * per_thread);
    assert_eq!(ids.iter().copied().min(), Some(1));
    assert_eq!(ids.iter().copied().max(), Some((threads * per_thread) as u32));
}

#[test]
fn test_concurrent_reads_never_see_torn_join() {
    let storage = Arc::new(setup_empty_storage());

    let writer = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || {
            for i in 0..100 {
                let seller = storage.create_user(new_user(&format!("seller{}", i))).unwrap();
                storage
                    .create_product(new_product(&format!("Lot {}", i), Category::Grains), seller.id)
                    .unwrap();
            }
        })
    };

    let reader = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || {
            for _ in 0..100 {
                for listing in storage.get_products(&ProductFilter::new()).unwrap() {
                    let seller = storage.get_user(listing.product.seller_id).unwrap().unwrap();
                    assert_eq!(listing.seller.first_name, seller.first_name);
                }
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(storage.get_products(&ProductFilter::new()).unwrap().len(), 100);
}
