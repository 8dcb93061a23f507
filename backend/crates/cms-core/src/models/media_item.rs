use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gallery image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub business_unit_id: String,

    pub title: String,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(
        business_unit_id: String,
        title: String,
        image_url: String,
        is_active: bool,
        sort_order: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_unit_id,
            title,
            image_url,
            alt_text: None,
            category: None,
            is_active,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}
