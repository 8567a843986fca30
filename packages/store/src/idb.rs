//! # IndexedDB key-value store — browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`](crate::KeyValueStore) implementation
//! used on the **web platform**. Values are persisted into the browser's
//! IndexedDB via the [`rexie`] crate, so the stored profile survives page
//! reloads.
//!
//! ## Database schema
//!
//! A single IndexedDB database named `"profilepad"` (version 1) with one
//! object store:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"kv"` | key string (e.g. `"userEmail"`) | value string |
//!
//! ## Connection management
//!
//! `IdbStore` opens a fresh [`Rexie`] connection on every operation. `Rexie`
//! does not implement `Clone`, and reopening is cheap because the browser
//! caches IndexedDB connections internally.
//!
//! ## Error handling
//!
//! Unlike the in-memory and filesystem stores, every IndexedDB step can fail
//! (blocked upgrade, quota, private-mode restrictions). Each failure maps to
//! [`StoreError::Backend`] and propagates to the caller, which surfaces a
//! generic retry message.

use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

const DB_NAME: &str = "profilepad";
const DB_VERSION: u32 = 1;
const KV_STORE: &str = "kv";

/// IndexedDB-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, StoreError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(KV_STORE))
            .build()
            .await
            .map_err(backend)
    }
}

fn backend(err: rexie::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadOnly)
            .map_err(backend)?;
        let store = tx.store(KV_STORE).map_err(backend)?;

        let value = store.get(JsValue::from_str(key)).await.map_err(backend)?;
        match value {
            Some(js_val) => {
                let text: String = serde_wasm_bindgen::from_value(js_val)
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(backend)?;
        let store = tx.store(KV_STORE).map_err(backend)?;

        let js_key = JsValue::from_str(key);
        let js_value = serde_wasm_bindgen::to_value(value)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        store.put(&js_value, Some(&js_key)).await.map_err(backend)?;
        tx.done().await.map_err(backend)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(backend)?;
        let store = tx.store(KV_STORE).map_err(backend)?;

        store.delete(JsValue::from_str(key)).await.map_err(backend)?;
        tx.done().await.map_err(backend)?;
        Ok(())
    }
}
