pub mod create_role_request;
pub mod role_dto;
pub mod roles;
