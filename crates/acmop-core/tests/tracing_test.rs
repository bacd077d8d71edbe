//! Tests for the acmop tracing setup.

use std::sync::Mutex;

use acmop_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_acmop_log_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ACMOP_LOG", "acmop_geometry=debug,acmop_variant=info");
    init_tracing();
    std::env::remove_var("ACMOP_LOG");
    assert!(tracing::dispatcher::has_been_set());
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("subscriber accepts events");
}

#[test]
fn test_invalid_acmop_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("ACMOP_LOG", "=,=not a filter[");
    init_tracing();
    std::env::remove_var("ACMOP_LOG");
    assert!(tracing::dispatcher::has_been_set());
}
