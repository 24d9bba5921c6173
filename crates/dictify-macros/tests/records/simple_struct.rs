use dictify::{Dict, IntoDict, to_dict};

#[derive(IntoDict)]
struct Profile {
    #[dict(tag = "name")]
    name: String,
    #[dict(tag = "age")]
    age: u8,
    #[dict(tag = "admin")]
    admin: bool,
    internal_id: u64,
}

#[test]
fn test_simple_struct() {
    let profile = Profile {
        name: "Alice".to_string(),
        age: 30,
        admin: false,
        internal_id: 99,
    };
    let dict = to_dict(&profile);
    let expected: Dict = [("name", "Alice"), ("age", "30"), ("admin", "false")]
        .into_iter()
        .collect();
    assert_eq!(dict, expected);
    assert!(!dict.contains_key("internal_id"));
    let _ = profile.internal_id;
}

#[derive(IntoDict)]
struct Coordinates(#[dict(tag = "lat")] f64, #[dict(tag = ",omitempty")] f64);

#[test]
fn test_tuple_struct() {
    let dict = to_dict(&Coordinates(35.5, -139.25));
    assert_eq!(dict.get("lat"), Some("35.5"));
    assert_eq!(dict.get("1"), Some("-139.25"));
}
