pub mod create_faq_request;
pub mod faq_dto;
pub mod faqs;
pub mod update_faq_request;
