use crate::ApiResult;

use cms_core::{RequiredFields, Role};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl CreateRoleRequest {
    pub fn into_role(self) -> ApiResult<Role> {
        RequiredFields::new()
            .check("name", self.name.as_deref())
            .check("displayName", self.display_name.as_deref())
            .finish()?;

        Ok(Role::new(
            self.name.unwrap_or_default(),
            self.display_name.unwrap_or_default(),
        ))
    }
}
