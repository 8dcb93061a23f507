pub mod business_unit;
pub mod content_item;
pub mod faq;
pub mod hero_slide;
pub mod media_item;
pub mod role;
pub mod testimonial;
pub mod website_config;
