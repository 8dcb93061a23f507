pub mod upsert_website_config_request;
pub mod website_config;
pub mod website_config_dto;
