use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A brand as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[schema(example = "Acme")]
    pub brand_name: String,
}

/// DTO for creating a brand
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    #[validate(length(min = 1, message = "brandName should not be empty"))]
    #[schema(example = "Acme")]
    pub brand_name: String,
}

impl From<CreateBrand> for Brand {
    fn from(input: CreateBrand) -> Self {
        Self {
            brand_name: input.brand_name,
        }
    }
}
