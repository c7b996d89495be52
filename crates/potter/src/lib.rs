//! Facade crate for the Potter API features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `potter` with the `server` feature to get the routers.
//! - Call `potter::init` to build the feature slices registered in `ApiState`.

pub use potter_domain as domain;
use potter_domain::config::ApiConfig;
use potter_domain::registry::InitializedSlice;
pub use potter_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use potter_catalog::routes::catalog_router;
        pub use potter_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use potter_catalog as catalog;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "catalog",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, features::catalog::CatalogError> {
    let slices = vec![features::catalog::init(&config.catalog)?];

    Ok(slices)
}
