pub mod create_media_item_request;
pub mod gallery;
pub mod media_item_dto;
