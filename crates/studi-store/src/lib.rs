//! Local persistence for studi: the serde data model, the file-per-key JSON
//! store, and query functions over the stored profile, the current-plan
//! slot, and the saved-plan collection.

pub mod error;
pub mod kv;
pub mod models;
pub mod plans;
pub mod profile;

pub use error::StoreError;
pub use kv::Store;
