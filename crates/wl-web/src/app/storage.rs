//! Browser storage access.
//!
//! A thin wrapper over localStorage/sessionStorage plus the two app-level
//! items kept there: the staged booking draft (cleared unconditionally on
//! logout) and the post-login return path (consumed once, loss is
//! non-fatal).

use serde::{Deserialize, Serialize};
use wl_types::packages::BookingDraft;

const BOOKING_DRAFT_KEY: &str = "wl-booking-draft";
const RETURN_PATH_KEY: &str = "wl-return-to";

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
}

/// Generic browser storage abstraction. All operations are no-ops off the
/// web target so shared code can call them unconditionally.
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend()?;
            match storage.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    web_sys::console::warn_2(&format!("Failed to get item from storage: {}", key).into(), &e);
                    None
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            None
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend().ok_or_else(|| "Storage not available".to_string())?;
            storage.set_item(key, value).map_err(|e| {
                let err_msg = format!("Failed to set item in storage '{}': {:?}", key, e);
                web_sys::console::warn_1(&err_msg.clone().into());
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    /// Remove a value from storage
    pub fn remove(&self, key: &str) -> Result<(), String> {
        #[cfg(feature = "web")]
        {
            let storage = self.backend().ok_or_else(|| "Storage not available".to_string())?;
            storage.remove_item(key).map_err(|e| {
                let err_msg = format!("Failed to remove item from storage '{}': {:?}", key, e);
                web_sys::console::warn_1(&err_msg.clone().into());
                err_msg
            })
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = key;
            Ok(())
        }
    }

    /// Get and deserialize a JSON value from storage
    pub fn get_json<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        serde_json::from_str(&value).ok()
    }

    /// Serialize and set a JSON value in storage
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_string(value).map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        self.set(key, &json)
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.storage_type {
            StorageType::Local => window.local_storage().ok()?,
            StorageType::Session => window.session_storage().ok()?,
        }
    }
}

/// Stage a booking draft while the client is still browsing.
pub fn stage_booking_draft(draft: &BookingDraft) {
    let _ = BrowserStorage::new(StorageType::Local).set_json(BOOKING_DRAFT_KEY, draft);
}

pub fn booking_draft() -> Option<BookingDraft> {
    BrowserStorage::new(StorageType::Local).get_json(BOOKING_DRAFT_KEY)
}

/// Drop any staged draft. Called from logout regardless of whether the
/// server acknowledged the logout.
pub fn clear_booking_draft() {
    let _ = BrowserStorage::new(StorageType::Local).remove(BOOKING_DRAFT_KEY);
}

/// Remember where an unauthenticated visitor was headed. Best effort.
pub fn stash_return_path(path: &str) {
    let _ = BrowserStorage::new(StorageType::Session).set(RETURN_PATH_KEY, path);
}

/// Take (and clear) the stashed return path.
pub fn take_return_path() -> Option<String> {
    let storage = BrowserStorage::new(StorageType::Session);
    let path = storage.get(RETURN_PATH_KEY)?;
    let _ = storage.remove(RETURN_PATH_KEY);
    Some(path)
}
