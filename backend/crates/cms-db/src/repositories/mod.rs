pub mod business_unit_repository;
pub mod content_item_repository;
pub mod faq_repository;
pub mod hero_slide_repository;
pub mod media_item_repository;
pub mod role_repository;
pub mod testimonial_repository;
pub mod website_config_repository;

mod scoped;
