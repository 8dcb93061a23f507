use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Per-tenant site configuration. At most one row per business unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteConfig {
    pub id: String,
    pub business_unit_id: String,

    pub site_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    /// Free-form map of network name to profile URL
    pub social_links: Value,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WebsiteConfig {
    pub fn new(business_unit_id: String, site_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_unit_id,
            site_name,
            tagline: None,
            logo_url: None,
            primary_color: None,
            secondary_color: None,
            contact_email: None,
            contact_phone: None,
            address: None,
            social_links: Value::Object(Default::default()),
            created_at: now,
            updated_at: now,
        }
    }
}
