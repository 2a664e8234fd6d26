//! Record storage for the show tracker.
//!
//! Handlers talk to a [`Store`] trait object; [`MemoryStore`] is the
//! process-local implementation used by the server and the tests.

pub mod memory;
pub mod seed;
pub mod store;

pub use memory::MemoryStore;
pub use store::{Store, StoreError};
