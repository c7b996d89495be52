#![cfg(feature = "server")]

use potter_kernel::domain::config::ApiConfig;
use potter_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use potter_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Glossary {
    terms: usize,
}

impl FeatureSlice for Glossary {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([InitializedSlice::new(Glossary { terms: 3 })])
        .build()
        .expect("state builds");

    assert_eq!(state.try_get_slice::<Glossary>().expect("registered").terms, 3);
    assert!(state.get_slice::<Unregistered>().is_none());
    assert!(matches!(
        state.try_get_slice::<Unregistered>(),
        Err(ApiStateError::MissingSlice { .. })
    ));
    assert_eq!(state.slice_names().count(), 1);
    assert_eq!(state.config.server.port, 3000);
}
