use crate::ApiResult;

use cms_core::{DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, RequiredFields, Testimonial, validate_rating};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonialRequest {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub content: Option<String>,
    pub rating: Option<i64>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

impl CreateTestimonialRequest {
    pub fn into_testimonial(self, business_unit_id: &str) -> ApiResult<Testimonial> {
        RequiredFields::new()
            .check("authorName", self.author_name.as_deref())
            .check("content", self.content.as_deref())
            .finish()?;

        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }

        let mut testimonial = Testimonial::new(
            business_unit_id.to_string(),
            self.author_name.unwrap_or_default(),
            self.content.unwrap_or_default(),
            self.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
            self.sort_order.unwrap_or(DEFAULT_SORT_ORDER),
        );
        testimonial.author_title = self.author_title;
        testimonial.rating = self.rating;
        Ok(testimonial)
    }
}
