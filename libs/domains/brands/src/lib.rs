//! Brands Domain
//!
//! Input shape and HTTP entry point for brands. Nothing is persisted.
//!
//! ```rust,no_run
//! use domain_brands::{handlers, BrandService};
//!
//! // Mounted under /brands by the app
//! let router = handlers::router(BrandService::new());
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{BrandError, BrandResult};
pub use handlers::ApiDoc;
pub use models::{Brand, CreateBrand};
pub use service::BrandService;
