//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /ticket-config/categories` (`?type_code=`).
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilterParams {
    pub type_code: Option<String>,
}
