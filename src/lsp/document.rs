/// State for each open SIF document
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
    pub version: Option<i32>,
}
