pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{connect, migrate};
pub use error::{DbError, Result};
pub use repositories::business_unit_repository::BusinessUnitRepository;
pub use repositories::content_item_repository::ContentItemRepository;
pub use repositories::faq_repository::FaqRepository;
pub use repositories::hero_slide_repository::HeroSlideRepository;
pub use repositories::media_item_repository::MediaItemRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::testimonial_repository::TestimonialRepository;
pub use repositories::website_config_repository::WebsiteConfigRepository;
