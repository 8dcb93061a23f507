use cms_core::Testimonial;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialDto {
    pub id: String,
    pub business_unit_id: String,
    pub author_name: String,
    pub author_title: Option<String>,
    pub content: String,
    pub rating: Option<i64>,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Testimonial> for TestimonialDto {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            business_unit_id: t.business_unit_id,
            author_name: t.author_name,
            author_title: t.author_title,
            content: t.content,
            rating: t.rating,
            is_active: t.is_active,
            sort_order: t.sort_order,
            created_at: t.created_at.timestamp(),
            updated_at: t.updated_at.timestamp(),
        }
    }
}
