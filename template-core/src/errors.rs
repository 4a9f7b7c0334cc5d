use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("no checkbox control resolves for bookmark `{0}`")]
    CheckboxNotFound(String),
    #[error("malformed document part: {0}")]
    MalformedDocument(String),
    #[error("failed to parse XML: {0}")]
    XMLReadError(#[from] quick_xml::DeError),
    #[error("failed to read document part")]
    IoError(#[from] std::io::Error),
}
