use crate::{
    ApiError, CreateFaqRequest, CreateTestimonialRequest, UpdateHeroSlideRequest,
    UpsertWebsiteConfigRequest,
};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_faq_without_optional_flags_when_converted_then_defaults_applied() {
    let req: CreateFaqRequest =
        serde_json::from_value(json!({"question": "Q", "answer": "A", "category": "general"}))
            .unwrap();

    let faq = req.into_faq("bu1").unwrap();

    assert_that!(faq.business_unit_id.as_str(), eq("bu1"));
    assert_that!(faq.is_active, eq(true));
    assert_that!(faq.sort_order, eq(0));
}

#[test]
fn given_faq_with_blank_answer_when_converted_then_missing_fields() {
    let req: CreateFaqRequest =
        serde_json::from_value(json!({"question": "Q", "answer": "  ", "category": "general"}))
            .unwrap();

    let result = req.into_faq("bu1");

    assert!(matches!(
        result,
        Err(ApiError::MissingFields { ref fields, .. }) if fields == &vec!["answer".to_string()]
    ));
}

#[test]
fn given_testimonial_rating_out_of_range_when_converted_then_bad_request() {
    let req: CreateTestimonialRequest = serde_json::from_value(
        json!({"authorName": "Ada", "content": "Lovely", "rating": 6}),
    )
    .unwrap();

    let result = req.into_testimonial("bu1");

    assert!(matches!(
        result,
        Err(ApiError::BadRequest { ref message, .. }) if message == "Invalid rating"
    ));
}

#[test]
fn given_hero_slide_update_blanking_title_when_converted_then_missing_fields() {
    let req: UpdateHeroSlideRequest = serde_json::from_value(json!({"title": ""})).unwrap();

    assert!(matches!(req.into_update(), Err(ApiError::MissingFields { .. })));
}

#[test]
fn given_hero_slide_update_with_only_sort_order_when_converted_then_ok() {
    let req: UpdateHeroSlideRequest = serde_json::from_value(json!({"sortOrder": 3})).unwrap();

    let update = req.into_update().unwrap();

    assert_that!(update.sort_order, some(eq(3)));
    assert_that!(update.title, none());
}

#[test]
fn given_social_links_array_when_converted_then_bad_request() {
    let req: UpsertWebsiteConfigRequest =
        serde_json::from_value(json!({"siteName": "Inn", "socialLinks": ["x"]})).unwrap();

    assert!(matches!(
        req.into_website_config("bu1"),
        Err(ApiError::BadRequest { .. })
    ));
}
