use crate::ApiResult;

use cms_core::{DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, MediaItem, RequiredFields};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMediaItemRequest {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl CreateMediaItemRequest {
    pub fn into_media_item(self, business_unit_id: &str) -> ApiResult<MediaItem> {
        RequiredFields::new()
            .check("title", self.title.as_deref())
            .check("imageUrl", self.image_url.as_deref())
            .finish()?;

        let mut item = MediaItem::new(
            business_unit_id.to_string(),
            self.title.unwrap_or_default(),
            self.image_url.unwrap_or_default(),
            self.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
            self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        );
        item.alt_text = self.alt_text;
        item.category = self.category;
        Ok(item)
    }
}
