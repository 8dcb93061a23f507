use crate::ApiResult;

use cms_core::{HeroSlideUpdate, RequiredFields};

use serde::Deserialize;

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHeroSlideRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl UpdateHeroSlideRequest {
    pub fn into_update(self) -> ApiResult<HeroSlideUpdate> {
        RequiredFields::new()
            .check_if_present("title", self.title.as_deref())
            .check_if_present("imageUrl", self.image_url.as_deref())
            .finish()?;

        Ok(HeroSlideUpdate {
            title: self.title,
            subtitle: self.subtitle,
            image_url: self.image_url,
            cta_text: self.cta_text,
            cta_link: self.cta_link,
            is_active: self.is_active,
            sort_order: self.sort_order,
        })
    }
}
