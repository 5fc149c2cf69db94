#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub level: usize,
    pub label: String,
    pub color: String,
    pub edge_label: Option<String>,
}
