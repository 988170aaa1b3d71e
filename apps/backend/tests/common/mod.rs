#![allow(dead_code)]

use predpool::db::txn_policy::{set_txn_policy, TxnPolicy};
use tracing_subscriber::{fmt, EnvFilter};

// Logging is auto-installed for every test binary that pulls in common.
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

// Policy defaults to rollback but can be flipped per-binary via
// `PREDPOOL_TXN_POLICY=commit`.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("PREDPOOL_TXN_POLICY")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "commit" => TxnPolicy::CommitOnOk,
        _ => TxnPolicy::RollbackOnOk,
    };

    set_txn_policy(policy);
}
