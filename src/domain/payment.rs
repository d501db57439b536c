//! Payment history records (admin view).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal event reference embedded in a payment row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentEventRef {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Minimal user reference embedded in a payment row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentUserRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A payment record mirrored from the upstream payment history listing.
/// Upstream schema drift is expected here (`tranId` vs `transactionId`),
/// so most fields are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    #[serde(default, alias = "tranId")]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event: Option<PaymentEventRef>,
    #[serde(default)]
    pub client: Option<PaymentUserRef>,
    #[serde(default)]
    pub host: Option<PaymentUserRef>,
}
