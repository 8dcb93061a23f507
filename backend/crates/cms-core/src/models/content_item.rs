use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `content_type` of the items served under `/cms/features`
pub const FEATURE_CONTENT_TYPE: &str = "feature";

/// Generic tenant content block; `content_type` distinguishes sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub business_unit_id: String,
    pub content_type: String,

    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn feature(
        business_unit_id: String,
        title: String,
        description: String,
        icon: Option<String>,
        is_active: bool,
        sort_order: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            business_unit_id,
            content_type: FEATURE_CONTENT_TYPE.to_string(),
            title,
            description,
            icon,
            is_active,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_feature(&self) -> bool {
        self.content_type == FEATURE_CONTENT_TYPE
    }
}
