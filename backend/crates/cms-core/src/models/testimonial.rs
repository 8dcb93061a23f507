use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub business_unit_id: String,

    pub author_name: String,
    pub author_title: Option<String>,
    pub content: String,
    /// Star rating, 1-5 when present
    pub rating: Option<i64>,
    pub is_active: bool,
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(
        business_unit_id: String,
        author_name: String,
        content: String,
        is_active: bool,
        sort_order: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_unit_id,
            author_name,
            author_title: None,
            content,
            rating: None,
            is_active,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}
