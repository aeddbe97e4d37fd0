//! Shared helpers for the behaviour tests.

#![allow(dead_code)]

use std::sync::Once;

use morphir_classic_ir::codec::AttributeCodec;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a `fmt` subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn unit() -> AttributeCodec<()> {
    AttributeCodec::unit()
}
