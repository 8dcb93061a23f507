pub mod body;
pub mod business_units;
pub mod error;
pub mod extractors;
pub mod faqs;
pub mod features;
pub mod gallery;
pub mod guard;
pub mod hero_slides;
pub mod roles;
pub mod testimonials;
pub mod website_config;
