use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site content defines no navigation links")]
    NoNavLinks,

    /// Hrefs must be in-page anchors such as `#about`.
    #[error("navigation href '{href}' is not an in-page anchor")]
    InvalidHref { href: String },

    #[error("section '{id}' is linked more than once")]
    DuplicateSection { id: String },

    #[error("last navigation link must be '{expected}', found '{found}'")]
    BottomSectionMismatch { expected: String, found: String },
}
