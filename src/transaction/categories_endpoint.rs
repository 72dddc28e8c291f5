//! Defines the route handler that lists the transaction categories.
use axum::Json;
use serde::Serialize;

use super::Category;

/// A category's wire name and display label.
#[derive(Debug, Serialize)]
pub struct CategoryOption {
    name: Category,
    label: &'static str,
}

/// List every category in declaration order.
pub async fn get_categories() -> Json<Vec<CategoryOption>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|category| CategoryOption {
                name: category,
                label: category.label(),
            })
            .collect(),
    )
}
