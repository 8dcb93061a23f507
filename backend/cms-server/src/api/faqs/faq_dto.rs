use cms_core::Faq;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqDto {
    pub id: String,
    pub business_unit_id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Faq> for FaqDto {
    fn from(f: Faq) -> Self {
        Self {
            id: f.id,
            business_unit_id: f.business_unit_id,
            question: f.question,
            answer: f.answer,
            category: f.category,
            is_active: f.is_active,
            sort_order: f.sort_order,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}
