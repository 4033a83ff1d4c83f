//! `localStorage`-backed theme preference and the OS color-scheme hint.
//!
//! Persistence is best-effort browser-only behavior; host builds read no
//! preference and drop writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::PreferenceStore;

/// Media query for the OS dark-mode hint.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Durable per-origin key-value store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::debug!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::debug!("localStorage read of {key} failed: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write of {key} failed: {err:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Whether the OS reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        matches!(window.match_media(PREFERS_DARK_QUERY), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
