//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the shared [`server::ApiState`]
//! and system routes.
//!
//! ## Config loading
//! ```rust,no_run
//! use potter_kernel::config::load_config;
//! use potter_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server.toml")).unwrap();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use potter_domain as domain;

pub mod prelude {
    pub use crate::config::{ConfigError, load_config};
    #[cfg(feature = "server")]
    pub use crate::server::{ApiState, ApiStateError};
    pub use potter_domain::config::ApiConfig;
}
