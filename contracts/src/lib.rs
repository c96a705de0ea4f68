//! Content and form contracts shared by the Ethovia frontend and backend.
//!
//! Nothing in here touches the DOM or an async runtime, so every module is
//! usable from the wasm client, the axum server and plain unit tests.

pub mod catalog;
pub mod contact;
pub mod filter;
pub mod icons;
pub mod theme;

pub use catalog::{portfolio, CaseStudy, CaseStudySummary, Catalog, CatalogError};
pub use contact::{Budget, ContactDraft, ContactReceipt, ContactRequest, Field, FieldErrors, Service};
pub use filter::{CategorySelection, FilteredView};
pub use icons::ResultIcon;
