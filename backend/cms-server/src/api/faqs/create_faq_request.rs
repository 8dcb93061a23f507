use crate::ApiResult;

use cms_core::{DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, Faq, RequiredFields};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl CreateFaqRequest {
    pub fn into_faq(self, business_unit_id: &str) -> ApiResult<Faq> {
        RequiredFields::new()
            .check("question", self.question.as_deref())
            .check("answer", self.answer.as_deref())
            .check("category", self.category.as_deref())
            .finish()?;

        Ok(Faq::new(
            business_unit_id.to_string(),
            self.question.unwrap_or_default(),
            self.answer.unwrap_or_default(),
            self.category.unwrap_or_default(),
            self.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
            self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        ))
    }
}
