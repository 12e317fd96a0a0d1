//! Buyer inquiries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductId;

pub type ContactId = u32;

/// An inquiry sent by a buyer about one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub product_id: ProductId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Inquiry payload
///
/// `product_id` is not checked against stored products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub product_id: ProductId,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub message: String,
}

impl NewContact {
    pub(crate) fn into_contact(self, id: ContactId, created_at: DateTime<Utc>) -> Contact {
        Contact {
            id,
            product_id: self.product_id,
            buyer_name: self.buyer_name,
            buyer_email: self.buyer_email,
            buyer_phone: self.buyer_phone,
            message: self.message,
            created_at,
        }
    }
}
