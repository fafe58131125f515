use thiserror::Error;

/// Failure reported by a platform adapter.
///
/// None of these reach the caller of `open`/`close`; the controller logs them and
/// carries on. Only `ModalController::attach` surfaces them, so the hosting
/// component can decide whether to render without escape support.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// No global `window` object, e.g. when running outside a browser.
    #[error("No window available")]
    NoWindow,

    /// The window has no document attached.
    #[error("No document available")]
    NoDocument,

    /// The document has no `<body>` element to apply the scroll lock to.
    #[error("Document has no body element")]
    NoBody,

    /// A browser API call threw.
    ///
    /// Carries the debug rendering of the thrown JavaScript value.
    #[error("JavaScript error: {0}")]
    Js(String),
}
