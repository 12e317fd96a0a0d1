//! Demonstration data
//!
//! Two sellers and four listings, inserted through the normal create path
//! so they receive ids 1.. and fresh timestamps.

use crate::error::Result;
use crate::model::{Category, NewProduct, NewUser, Price, Role};

use super::Storage;

struct SampleUser {
    username: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    first_name: &'static str,
    last_name: &'static str,
    phone: &'static str,
    location: &'static str,
}

struct SampleProduct {
    seller_id: u32,
    title: &'static str,
    description: &'static str,
    price: &'static str,
    quantity: &'static str,
    category: Category,
    location: &'static str,
}

const SAMPLE_USERS: [SampleUser; 2] = [
    SampleUser {
        username: "ali_farmer",
        email: "ali@example.com",
        password: "hashedpassword123",
        role: Role::Farmer,
        first_name: "Ali",
        last_name: "Ahmed",
        phone: "+92 300 1234567",
        location: "Lahore, Punjab",
    },
    SampleUser {
        username: "fatima_trader",
        email: "fatima@example.com",
        password: "hashedpassword456",
        role: Role::Trader,
        first_name: "Fatima",
        last_name: "Khan",
        phone: "+92 333 9876543",
        location: "Karachi, Sindh",
    },
];

const SAMPLE_PRODUCTS: [SampleProduct; 4] = [
    SampleProduct {
        seller_id: 1,
        title: "Premium Basmati Rice",
        description: "High-quality basmati rice, freshly harvested from our organic farm. Perfect for daily cooking and special occasions.",
        price: "85",
        quantity: "500kg",
        category: Category::Grains,
        location: "Lahore, Punjab",
    },
    SampleProduct {
        seller_id: 1,
        title: "Fresh Tomatoes",
        description: "Vine-ripened tomatoes, grown without pesticides. Rich in vitamins and perfect for cooking.",
        price: "120",
        quantity: "200kg",
        category: Category::Vegetables,
        location: "Lahore, Punjab",
    },
    SampleProduct {
        seller_id: 2,
        title: "Sweet Mangoes",
        description: "Delicious Chaunsa mangoes, hand-picked at perfect ripeness. Sweet and juicy.",
        price: "180",
        quantity: "100kg",
        category: Category::Fruits,
        location: "Karachi, Sindh",
    },
    SampleProduct {
        seller_id: 1,
        title: "Wheat Flour",
        description: "Stone-ground wheat flour from our own wheat harvest. Perfect for making fresh bread and chapati.",
        price: "65",
        quantity: "1000kg",
        category: Category::Grains,
        location: "Lahore, Punjab",
    },
];

/// Insert the sample users, then the sample products
pub(super) fn seed_sample_data(storage: &dyn Storage) -> Result<()> {
    for sample in &SAMPLE_USERS {
        storage.create_user(NewUser {
            username: sample.username.to_string(),
            email: sample.email.to_string(),
            password: sample.password.to_string(),
            role: sample.role,
            first_name: sample.first_name.to_string(),
            last_name: sample.last_name.to_string(),
            phone: sample.phone.to_string(),
            location: sample.location.to_string(),
            profile_image_url: None,
        })?;
    }

    for sample in &SAMPLE_PRODUCTS {
        let product = NewProduct {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            price: Price::parse(sample.price)?,
            quantity: sample.quantity.to_string(),
            category: sample.category,
            location: sample.location.to_string(),
            image_url: None,
        };
        storage.create_product(product, sample.seller_id)?;
    }

    tracing::info!(
        users = SAMPLE_USERS.len(),
        products = SAMPLE_PRODUCTS.len(),
        "seeded sample data"
    );
    Ok(())
}
