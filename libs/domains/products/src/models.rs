use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store, never changes
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Widget")]
    pub product_name: String,
}

impl Product {
    /// Apply a partial update; absent fields keep their value
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "productName should not be empty"))]
    #[schema(example = "Widget")]
    pub product_name: String,
}

/// DTO for partially updating a product
///
/// `productName: null` is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "productName should not be empty"))]
    #[schema(example = "Gadget")]
    pub product_name: Option<String>,
}

impl UpdateProduct {
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
    }
}
