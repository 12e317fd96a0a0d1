//! Product listings and the seller join

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};
use super::user::{User, UserId};

pub type ProductId = u32;

/// Exclusive upper bound on a price's integer part (precision 10, scale 2)
const PRICE_INTEGER_LIMIT: i64 = 100_000_000;

/// Fractional digits allowed by a price
const PRICE_MAX_SCALE: u32 = 2;

// =============================================================================
// Category
// =============================================================================

/// Listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Grains,
    Vegetables,
    Fruits,
    Livestock,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Grains,
        Category::Vegetables,
        Category::Fruits,
        Category::Livestock,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Grains => "grains",
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Livestock => "livestock",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MarketError;

    /// Case-sensitive: "Grains" is not a category
    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| MarketError::InvalidCategory(s.to_string()))
    }
}

// =============================================================================
// Price
// =============================================================================

/// Non-negative decimal price kept in its textual form
///
/// Must parse as a `Decimal` that is not negative, has at most two
/// fractional digits and fewer than nine integer digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(String);

impl Price {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let value = match Decimal::from_str(&raw) {
            Ok(value) => value,
            Err(_) => return Err(MarketError::InvalidPrice(raw)),
        };

        let in_range = !value.is_sign_negative()
            && value.scale() <= PRICE_MAX_SCALE
            && value.trunc() < Decimal::from(PRICE_INTEGER_LIMIT);

        if in_range {
            Ok(Self(raw))
        } else {
            Err(MarketError::InvalidPrice(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Price {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        Price::parse(s)
    }
}

impl TryFrom<String> for Price {
    type Error = MarketError;

    fn try_from(value: String) -> Result<Self> {
        Price::parse(value)
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A listing owned by one seller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub seller_id: UserId,
    pub title: String,
    pub description: String,
    pub price: Price,
    /// Free text such as "500kg"
    pub quantity: String,
    pub category: Category,
    pub location: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Listing payload; seller, activity flag and timestamps come from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub quantity: String,
    pub category: Category,
    pub location: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Build the stored record; new listings are always active
    pub(crate) fn into_product(
        self,
        id: ProductId,
        seller_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Product {
        Product {
            id,
            seller_id,
            title: self.title,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            category: self.category,
            location: self.location,
            image_url: self.image_url.filter(|url| !url.is_empty()),
            is_active: true,
            created_at,
        }
    }
}

// =============================================================================
// Join
// =============================================================================

/// Public projection of a seller attached to a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerSummary {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
}

impl From<&User> for SellerSummary {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            location: user.location.clone(),
        }
    }
}

/// A product joined with its seller's public fields
///
/// Serializes as the product's fields plus a nested `seller` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWithSeller {
    #[serde(flatten)]
    pub product: Product,
    pub seller: SellerSummary,
}

impl ProductWithSeller {
    pub fn new(product: Product, seller: &User) -> Self {
        Self {
            product,
            seller: SellerSummary::from(seller),
        }
    }
}
