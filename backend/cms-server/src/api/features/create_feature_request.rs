use crate::ApiResult;

use cms_core::{ContentItem, DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, RequiredFields};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeatureRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl CreateFeatureRequest {
    pub fn into_feature(self, business_unit_id: &str) -> ApiResult<ContentItem> {
        RequiredFields::new()
            .check("title", self.title.as_deref())
            .check("description", self.description.as_deref())
            .finish()?;

        Ok(ContentItem::feature(
            business_unit_id.to_string(),
            self.title.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.icon,
            self.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
            self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        ))
    }
}
