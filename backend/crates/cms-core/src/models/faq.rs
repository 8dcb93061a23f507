use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub business_unit_id: String,

    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Faq {
    pub fn new(
        business_unit_id: String,
        question: String,
        answer: String,
        category: String,
        is_active: bool,
        sort_order: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_unit_id,
            question,
            answer,
            category,
            is_active,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct FaqUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}
