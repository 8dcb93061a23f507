use cms_core::HeroSlide;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlideDto {
    pub id: String,
    pub business_unit_id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<HeroSlide> for HeroSlideDto {
    fn from(h: HeroSlide) -> Self {
        Self {
            id: h.id,
            business_unit_id: h.business_unit_id,
            title: h.title,
            subtitle: h.subtitle,
            image_url: h.image_url,
            cta_text: h.cta_text,
            cta_link: h.cta_link,
            is_active: h.is_active,
            sort_order: h.sort_order,
            created_at: h.created_at.timestamp(),
            updated_at: h.updated_at.timestamp(),
        }
    }
}
