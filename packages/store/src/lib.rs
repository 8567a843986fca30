pub mod error;
pub mod keys;
pub mod models;
pub mod profile;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use error::StoreError;
pub use models::{LoginOutcome, SessionStatus, UserProfile};
pub use profile::ProfileRepository;
