mod faq;
mod website_config;
