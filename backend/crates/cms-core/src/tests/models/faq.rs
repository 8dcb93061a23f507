use crate::{ContentItem, Faq, FEATURE_CONTENT_TYPE};

#[test]
fn test_faq_new() {
    let faq = Faq::new(
        "bu1".to_string(),
        "Is breakfast included?".to_string(),
        "Yes, from 7 to 10am.".to_string(),
        "dining".to_string(),
        true,
        0,
    );

    assert_eq!(faq.business_unit_id, "bu1");
    assert_eq!(faq.category, "dining");
    assert!(faq.is_active);
    assert_eq!(faq.sort_order, 0);
    assert_eq!(faq.created_at, faq.updated_at);
    assert!(!faq.id.is_empty());
}

#[test]
fn test_faq_new_generates_distinct_ids() {
    let a = Faq::new("bu1".into(), "Q".into(), "A".into(), "c".into(), true, 0);
    let b = Faq::new("bu1".into(), "Q".into(), "A".into(), "c".into(), true, 0);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_content_item_feature() {
    let item = ContentItem::feature(
        "bu1".to_string(),
        "Rooftop pool".to_string(),
        "Open all year".to_string(),
        Some("pool".to_string()),
        false,
        3,
    );

    assert_eq!(item.content_type, FEATURE_CONTENT_TYPE);
    assert!(item.is_feature());
    assert!(!item.is_active);
    assert_eq!(item.sort_order, 3);
}
