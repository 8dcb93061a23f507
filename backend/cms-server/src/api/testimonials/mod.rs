pub mod create_testimonial_request;
pub mod testimonial_dto;
pub mod testimonials;
