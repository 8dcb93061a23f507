use crate::WebsiteConfig;

#[test]
fn test_website_config_new_has_empty_social_links() {
    let config = WebsiteConfig::new("bu1".to_string(), "Seaside Inn".to_string());

    assert_eq!(config.site_name, "Seaside Inn");
    assert!(config.social_links.as_object().is_some_and(|m| m.is_empty()));
    assert!(config.tagline.is_none());
}
