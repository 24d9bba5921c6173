use dictify::IntoDict;

#[derive(IntoDict)]
struct Filter<'a, T, const N: usize> {
    #[dict(tag = "values")]
    values: [T; N],
    #[dict(tag = "label,omitempty")]
    label: &'a str,
}

fn main() {
    let filter = Filter {
        values: [1u8, 2, 3],
        label: "",
    };
    assert_eq!(dictify::to_dict(&filter).get("values"), Some("1,2,3"));
}
