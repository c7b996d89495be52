//! Shared string and numeric constants.

/// `OpenAPI` tag for infrastructure endpoints (`/health`).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the reference data endpoints.
pub const CATALOG_TAG: &str = "Catalog";

/// Records per page when `page` is requested without `max`.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Environment prefix for configuration overrides (`POTTER__SERVER__PORT`).
pub const ENV_PREFIX: &str = "POTTER";
/// Configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";
