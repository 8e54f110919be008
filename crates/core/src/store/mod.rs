//! Case list store

pub mod case_store;
pub mod state;

pub use case_store::CaseStore;
pub use state::CaseState;
