use cms_core::BusinessUnit;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUnitDto {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

impl From<BusinessUnit> for BusinessUnitDto {
    fn from(b: BusinessUnit) -> Self {
        Self {
            id: b.id,
            name: b.name,
            display_name: b.display_name,
        }
    }
}
