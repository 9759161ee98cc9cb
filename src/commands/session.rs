//! Session Commands
//!
//! The auth flow stores the signed-in user's access token in localStorage;
//! these wrappers read and clear it.

use site_core::repository::SessionRepository;
use site_core::Backend;

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("No window")?
        .local_storage()
        .map_err(|e| format!("Storage error: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Access token saved by the sign-in page, if any
pub fn load_access_token(key: &str) -> Option<String> {
    match local_storage().and_then(|s| s.get_item(key).map_err(|e| format!("{:?}", e))) {
        Ok(token) => token.filter(|t| !t.is_empty()),
        Err(e) => {
            log::warn!("[session] cannot read access token: {}", e);
            None
        }
    }
}

pub fn clear_access_token(key: &str) -> Result<(), String> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| format!("Storage error: {:?}", e))
}

/// End the session at the backend and forget the local token.
/// The token is cleared even when the backend call fails.
pub async fn sign_out(backend: &Backend, key: &str) -> Result<(), String> {
    let remote = backend.sign_out().await.map_err(|e| e.to_string());
    clear_access_token(key)?;
    remote
}
