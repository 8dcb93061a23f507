pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    business_units::{
        business_unit_dto::BusinessUnitDto,
        business_units::{create_business_unit, list_business_units},
        create_business_unit_request::CreateBusinessUnitRequest,
    },
    error::{ApiError, OperationContext, Result as ApiResult},
    extractors::{
        maybe_session::MaybeSession,
        tenant::{HeaderTenant, QueryTenant, TENANT_HEADER, TENANT_QUERY_PARAM, TenantSource},
    },
    faqs::{
        create_faq_request::CreateFaqRequest,
        faq_dto::FaqDto,
        faqs::{create_faq, delete_faq, list_faqs, update_faq},
        update_faq_request::UpdateFaqRequest,
    },
    features::{
        create_feature_request::CreateFeatureRequest,
        feature_dto::FeatureDto,
        features::{create_feature, delete_feature, list_features},
    },
    gallery::{
        create_media_item_request::CreateMediaItemRequest,
        gallery::{create_gallery_item, delete_gallery_item, list_gallery},
        media_item_dto::MediaItemDto,
    },
    hero_slides::{
        create_hero_slide_request::CreateHeroSlideRequest,
        hero_slide_dto::HeroSlideDto,
        hero_slides::{create_hero_slide, delete_hero_slide, list_hero_slides, update_hero_slide},
        update_hero_slide_request::UpdateHeroSlideRequest,
    },
    roles::{
        create_role_request::CreateRoleRequest,
        role_dto::RoleDto,
        roles::{create_role, list_roles, list_tenant_roles},
    },
    testimonials::{
        create_testimonial_request::CreateTestimonialRequest,
        testimonial_dto::TestimonialDto,
        testimonials::{create_testimonial, delete_testimonial, list_testimonials},
    },
    website_config::{
        upsert_website_config_request::UpsertWebsiteConfigRequest,
        website_config::{get_website_config, upsert_website_config},
        website_config_dto::WebsiteConfigDto,
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
