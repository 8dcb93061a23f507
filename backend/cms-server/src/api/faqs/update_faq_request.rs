use crate::ApiResult;

use cms_core::{FaqUpdate, RequiredFields};

use serde::Deserialize;

/// Partial update; omitted fields keep their stored value
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl UpdateFaqRequest {
    pub fn into_update(self) -> ApiResult<FaqUpdate> {
        RequiredFields::new()
            .check_if_present("question", self.question.as_deref())
            .check_if_present("answer", self.answer.as_deref())
            .check_if_present("category", self.category.as_deref())
            .finish()?;

        Ok(FaqUpdate {
            question: self.question,
            answer: self.answer,
            category: self.category,
            is_active: self.is_active,
            sort_order: self.sort_order,
        })
    }
}
