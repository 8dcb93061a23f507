use cms_core::WebsiteConfig;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfigDto {
    pub id: String,
    pub business_unit_id: String,
    pub site_name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Value,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<WebsiteConfig> for WebsiteConfigDto {
    fn from(w: WebsiteConfig) -> Self {
        Self {
            id: w.id,
            business_unit_id: w.business_unit_id,
            site_name: w.site_name,
            tagline: w.tagline,
            logo_url: w.logo_url,
            primary_color: w.primary_color,
            secondary_color: w.secondary_color,
            contact_email: w.contact_email,
            contact_phone: w.contact_phone,
            address: w.address,
            social_links: w.social_links,
            created_at: w.created_at.timestamp(),
            updated_at: w.updated_at.timestamp(),
        }
    }
}
