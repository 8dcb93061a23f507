use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSlide {
    pub id: String,
    pub business_unit_id: String,

    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    /// Call-to-action button label and target
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HeroSlide {
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
            subtitle: None,
            image_url,
            cta_text: None,
            cta_link: None,
            is_active,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct HeroSlideUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}
