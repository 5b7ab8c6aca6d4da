#![doc(test(attr(deny(warnings))))]

//! Findash Core offers the state-management, calculation, and persistence
//! primitives behind a household finance dashboard: a transaction ledger,
//! savings goals, simple tasks, spending categories, and portable backups.
//!
//! Rendering, navigation, and chart drawing live outside this crate; the two
//! advisory HTTP services it talks to are consumed as opaque request/response
//! boundaries under [`remote`].

pub mod backup;
pub mod calc;
pub mod commands;
pub mod domain;
pub mod errors;
pub mod goals;
pub mod remote;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Findash Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
