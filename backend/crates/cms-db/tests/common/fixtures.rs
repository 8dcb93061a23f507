use cms_core::{
    DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, Faq, HeroSlide, MediaItem, Testimonial, WebsiteConfig,
};

/// Creates a test Faq with sensible defaults
pub fn create_test_faq(business_unit_id: &str) -> Faq {
    Faq::new(
        business_unit_id.to_string(),
        "What time is check-in?".to_string(),
        "From 3pm.".to_string(),
        "general".to_string(),
        DEFAULT_IS_ACTIVE,
        DEFAULT_SORT_ORDER,
    )
}

/// Creates a test Faq at a given position
pub fn create_test_faq_at(business_unit_id: &str, sort_order: i64) -> Faq {
    let mut faq = create_test_faq(business_unit_id);
    faq.question = format!("Question {}", sort_order);
    faq.sort_order = sort_order;
    faq
}

pub fn create_test_testimonial(business_unit_id: &str) -> Testimonial {
    let mut testimonial = Testimonial::new(
        business_unit_id.to_string(),
        "Ada".to_string(),
        "Wonderful stay.".to_string(),
        DEFAULT_IS_ACTIVE,
        DEFAULT_SORT_ORDER,
    );
    testimonial.rating = Some(5);
    testimonial
}

pub fn create_test_media_item(business_unit_id: &str) -> MediaItem {
    MediaItem::new(
        business_unit_id.to_string(),
        "Lobby".to_string(),
        "https://cdn.example.com/lobby.jpg".to_string(),
        DEFAULT_IS_ACTIVE,
        DEFAULT_SORT_ORDER,
    )
}

pub fn create_test_hero_slide(business_unit_id: &str) -> HeroSlide {
    let mut slide = HeroSlide::new(
        business_unit_id.to_string(),
        "Welcome".to_string(),
        "https://cdn.example.com/hero.jpg".to_string(),
        DEFAULT_IS_ACTIVE,
        DEFAULT_SORT_ORDER,
    );
    slide.subtitle = Some("Your home by the sea".to_string());
    slide
}

pub fn create_test_website_config(business_unit_id: &str) -> WebsiteConfig {
    let mut config = WebsiteConfig::new(business_unit_id.to_string(), "Seaside Inn".to_string());
    config.primary_color = Some("#004466".to_string());
    config.social_links = serde_json::json!({ "instagram": "https://instagram.com/seaside" });
    config
}
