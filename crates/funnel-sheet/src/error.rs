//! Error types for sheet rendering.

/// Errors that can occur while rendering character sheets.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// A sheet template lacks a slot every sheet fills.
    #[error("sheet template has no slot '{0}'")]
    MissingSlot(String),

    /// A sheet template lacks the group that gets placed on the page.
    #[error("sheet template has no <g id=\"content\"> group")]
    MissingContent,

    /// A page was requested with no characters, or with more than fit.
    #[error("a page holds 1 to {max} sheets, got {count}")]
    PageSize {
        /// Sheets requested.
        count: usize,
        /// Sheets per page.
        max: usize,
    },

    /// A sheet template is not well-formed XML.
    #[error("malformed sheet template: {0}")]
    Xml(String),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for rendering.
pub type SheetResult<T> = Result<T, SheetError>;
