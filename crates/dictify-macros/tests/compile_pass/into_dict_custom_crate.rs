mod reexport {
    pub use dictify;
}

use dictify::IntoDict;

#[derive(IntoDict)]
#[dict(crate = reexport::dictify)]
struct Page {
    #[dict(tag = "page")]
    page: u32,
}

fn main() {
    let _ = dictify::to_dict(&Page { page: 1 });
}
