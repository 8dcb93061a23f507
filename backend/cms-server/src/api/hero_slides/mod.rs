pub mod create_hero_slide_request;
pub mod hero_slide_dto;
pub mod hero_slides;
pub mod update_hero_slide_request;
