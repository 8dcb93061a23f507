use cms_core::MediaItem;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemDto {
    pub id: String,
    pub business_unit_id: String,
    pub title: String,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<MediaItem> for MediaItemDto {
    fn from(m: MediaItem) -> Self {
        Self {
            id: m.id,
            business_unit_id: m.business_unit_id,
            title: m.title,
            image_url: m.image_url,
            alt_text: m.alt_text,
            category: m.category,
            is_active: m.is_active,
            sort_order: m.sort_order,
            created_at: m.created_at.timestamp(),
            updated_at: m.updated_at.timestamp(),
        }
    }
}
