use crate::{
    AppState, create_business_unit, create_faq, create_feature, create_gallery_item,
    create_hero_slide, create_role, create_testimonial, delete_faq, delete_feature,
    delete_gallery_item, delete_hero_slide, delete_testimonial, get_website_config, health,
    list_business_units, list_faqs, list_features, list_gallery, list_hero_slides, list_roles,
    list_tenant_roles, list_testimonials, update_faq, update_hero_slide, upsert_website_config,
};

use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Administration
        .route("/roles", get(list_tenant_roles))
        .route(
            "/admin/business-units",
            get(list_business_units).post(create_business_unit),
        )
        .route("/admin/roles", get(list_roles).post(create_role))
        // Content
        .route("/cms/faqs", get(list_faqs).post(create_faq))
        .route("/cms/faqs/{id}", delete(delete_faq).patch(update_faq))
        .route("/cms/features", get(list_features).post(create_feature))
        .route("/cms/features/{id}", delete(delete_feature))
        .route("/cms/gallery", get(list_gallery).post(create_gallery_item))
        .route("/cms/gallery/{id}", delete(delete_gallery_item))
        .route(
            "/cms/hero-slides",
            get(list_hero_slides).post(create_hero_slide),
        )
        .route(
            "/cms/hero-slides/{id}",
            delete(delete_hero_slide).patch(update_hero_slide),
        )
        .route(
            "/cms/testimonials",
            get(list_testimonials).post(create_testimonial),
        )
        .route("/cms/testimonials/{id}", delete(delete_testimonial))
        .route(
            "/cms/website-config",
            get(get_website_config).post(upsert_website_config),
        )
        .with_state(state)
        .layer(cors_layer(allowed_origins))
}

/// Any origin when `allowed_origins` is empty, else exactly those listed.
/// Entries that are not valid header values are skipped and never widen the
/// policy.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    log::warn!("Ignoring invalid CORS origin: {:?}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
