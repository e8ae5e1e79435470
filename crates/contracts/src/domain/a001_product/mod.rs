pub mod aggregate;
pub mod catalog;
pub mod draft;

pub use aggregate::{Product, ProductId};
pub use catalog::ProductCatalog;
pub use draft::{ProductDraft, ProductField};
