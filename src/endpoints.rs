//! The API endpoints URIs.

/// The root route which describes the available endpoints.
pub const ROOT: &str = "/";
/// The route for listing filtered transactions with headline totals.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the dashboard chart data.
pub const DASHBOARD_API: &str = "/api/dashboard";
/// The route for listing the transaction categories.
pub const CATEGORIES_API: &str = "/api/categories";
