/// One linked page of the generated index.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Entry {
    /// Link target relative to the output directory, e.g. `guide.html` or `../guide.html`.
    pub file: String,
    pub title: String,
}

impl Entry {
    pub fn new(file: String, title: String) -> Self {
        Entry { file, title }
    }
}
