pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::business_unit::BusinessUnit;
pub use models::content_item::{ContentItem, FEATURE_CONTENT_TYPE};
pub use models::faq::{Faq, FaqUpdate};
pub use models::hero_slide::{HeroSlide, HeroSlideUpdate};
pub use models::media_item::MediaItem;
pub use models::role::Role;
pub use models::testimonial::Testimonial;
pub use models::website_config::WebsiteConfig;
pub use validation::{
    DEFAULT_IS_ACTIVE, DEFAULT_SORT_ORDER, MAX_RATING, MIN_RATING, RequiredFields, is_blank,
    validate_rating,
};

#[cfg(test)]
mod tests;
