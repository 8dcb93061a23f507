use crate::{ApiError, ApiResult};

use cms_core::{RequiredFields, WebsiteConfig};

use serde::Deserialize;
use serde_json::Value;

/// Full replacement of a unit's configuration; omitted optional fields are
/// cleared.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertWebsiteConfigRequest {
    pub site_name: Option<String>,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub social_links: Option<Value>,
}

impl UpsertWebsiteConfigRequest {
    pub fn into_website_config(self, business_unit_id: &str) -> ApiResult<WebsiteConfig> {
        RequiredFields::new()
            .check("siteName", self.site_name.as_deref())
            .finish()?;

        let mut config =
            WebsiteConfig::new(business_unit_id.to_string(), self.site_name.unwrap_or_default());
        config.tagline = self.tagline;
        config.logo_url = self.logo_url;
        config.primary_color = self.primary_color;
        config.secondary_color = self.secondary_color;
        config.contact_email = self.contact_email;
        config.contact_phone = self.contact_phone;
        config.address = self.address;

        match self.social_links {
            None | Some(Value::Null) => {}
            Some(links @ Value::Object(_)) => config.social_links = links,
            Some(_) => return Err(ApiError::bad_request("Invalid socialLinks")),
        }

        Ok(config)
    }
}
