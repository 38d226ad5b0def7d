//! Brand Service
//!
//! Brands have a validated input shape but no storage yet: `create`
//! returns the brand it was given.

use tracing::instrument;
use validator::Validate;

use crate::error::BrandResult;
use crate::models::{Brand, CreateBrand};

#[derive(Debug, Clone, Default)]
pub struct BrandService;

impl BrandService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and echo the brand
    #[instrument(skip(self, input), fields(brand_name = %input.brand_name))]
    pub async fn create(&self, input: CreateBrand) -> BrandResult<Brand> {
        input.validate()?;
        tracing::info!("Accepted brand");
        Ok(input.into())
    }
}
