use crate::ApiResult;

use cms_core::{DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, HeroSlide, RequiredFields};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroSlideRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl CreateHeroSlideRequest {
    pub fn into_hero_slide(self, business_unit_id: &str) -> ApiResult<HeroSlide> {
        RequiredFields::new()
            .check("title", self.title.as_deref())
            .check("imageUrl", self.image_url.as_deref())
            .finish()?;

        let mut slide = HeroSlide::new(
            business_unit_id.to_string(),
            self.title.unwrap_or_default(),
            self.image_url.unwrap_or_default(),
            self.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
            self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        );
        slide.subtitle = self.subtitle;
        slide.cta_text = self.cta_text;
        slide.cta_link = self.cta_link;
        Ok(slide)
    }
}
