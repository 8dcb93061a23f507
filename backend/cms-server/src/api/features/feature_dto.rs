use cms_core::ContentItem;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDto {
    pub id: String,
    pub business_unit_id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ContentItem> for FeatureDto {
    fn from(c: ContentItem) -> Self {
        Self {
            id: c.id,
            business_unit_id: c.business_unit_id,
            title: c.title,
            description: c.description,
            icon: c.icon,
            is_active: c.is_active,
            sort_order: c.sort_order,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
