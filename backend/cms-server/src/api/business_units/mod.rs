pub mod business_unit_dto;
pub mod business_units;
pub mod create_business_unit_request;
