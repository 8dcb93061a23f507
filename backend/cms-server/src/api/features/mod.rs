pub mod create_feature_request;
pub mod feature_dto;
pub mod features;
