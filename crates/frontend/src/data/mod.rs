pub mod http;
pub mod mock;
pub mod provider;
pub mod query;

/// Placeholder company used when the route carries no company id.
pub const DEFAULT_COMPANY_ID: &str = "comp_1";

/// Display currency until per-user currency settings exist.
pub const DEFAULT_CURRENCY: &str = "USD";
