use dictify::{IntoDict, to_dict};

#[derive(IntoDict)]
struct Page<T> {
    #[dict(tag = "items")]
    items: Vec<T>,
    #[dict(tag = "next,omitempty")]
    next: Option<T>,
}

#[test]
fn test_generic_record() {
    let page = Page {
        items: vec![1u16, 2, 3],
        next: Some(4),
    };
    let dict = to_dict(&page);
    assert_eq!(dict.get("items"), Some("1,2,3"));
    assert_eq!(dict.get("next"), Some("4"));

    let last = Page::<&str> {
        items: vec!["x"],
        next: None,
    };
    let dict = to_dict(&last);
    assert_eq!(dict.get("items"), Some("x"));
    assert!(!dict.contains_key("next"));
}
