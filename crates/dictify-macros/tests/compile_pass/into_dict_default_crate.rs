use dictify::IntoDict;

#[derive(IntoDict)]
struct Login {
    #[dict(tag = "user")]
    user: String,
    #[dict(tag = "remember,omitempty")]
    remember: Option<bool>,
    session: std::collections::HashMap<String, String>,
}

#[derive(IntoDict)]
struct Empty;

fn main() {
    let login = Login {
        user: "root".to_string(),
        remember: None,
        session: Default::default(),
    };
    let _ = dictify::to_dict(&login);
    let _ = dictify::to_dict(&Empty);
}
