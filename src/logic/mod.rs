//! Core non-UI logic split into modular submodules.

pub mod charts;
pub mod form;
pub mod listing;
pub mod validation;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use form::{SUBMIT_SUCCESS, ServiceForm, ServiceRequest};
pub use listing::{
    DEFAULT_PAGE_SIZE, ListingCommand, ListingState, NewsListController, RenderTarget,
};
pub use validation::{FieldName, validate_field};
