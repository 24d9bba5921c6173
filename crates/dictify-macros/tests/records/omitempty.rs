use dictify::{IntoDict, to_dict};

#[allow(non_snake_case)]
#[derive(IntoDict)]
struct Query {
    #[dict(tag = "tag,omitempty")]
    tag: String,
    #[dict(tag = "count,omitempty")]
    count: i32,
    #[dict(tag = "cursor,omitempty")]
    cursor: Option<String>,
    #[dict(tag = "note")]
    note: Option<String>,
    #[dict(tag = ",omitempty")]
    Sort: Vec<String>,
}

#[test]
fn test_empty_values_are_omitted() {
    let query = Query {
        tag: String::new(),
        count: 0,
        cursor: None,
        note: None,
        Sort: Vec::new(),
    };
    let dict = to_dict(&query);
    assert!(!dict.contains_key("tag"));
    assert!(!dict.contains_key("cursor"));
    assert!(!dict.contains_key("Sort"));
    // zero is "0", which is not empty
    assert_eq!(dict.get("count"), Some("0"));
    // not omitempty, so kept as an empty string
    assert_eq!(dict.get("note"), Some(""));
    assert_eq!(dict.len(), 2);
}

#[test]
fn test_present_values_are_kept() {
    let query = Query {
        tag: "rust".to_string(),
        count: 5,
        cursor: Some("abc".to_string()),
        note: Some("hi".to_string()),
        Sort: vec!["name".to_string(), "date".to_string()],
    };
    let dict = to_dict(&query);
    assert_eq!(dict.get("tag"), Some("rust"));
    assert_eq!(dict.get("count"), Some("5"));
    assert_eq!(dict.get("cursor"), Some("abc"));
    assert_eq!(dict.get("Sort"), Some("name,date"));
}
