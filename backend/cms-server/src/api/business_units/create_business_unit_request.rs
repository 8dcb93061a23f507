use crate::ApiResult;

use cms_core::{BusinessUnit, RequiredFields};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessUnitRequest {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl CreateBusinessUnitRequest {
    pub fn into_business_unit(self) -> ApiResult<BusinessUnit> {
        RequiredFields::new()
            .check("name", self.name.as_deref())
            .check("displayName", self.display_name.as_deref())
            .finish()?;

        Ok(BusinessUnit::new(
            self.name.unwrap_or_default(),
            self.display_name.unwrap_or_default(),
        ))
    }
}
