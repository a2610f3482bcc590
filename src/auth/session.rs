//! Session Store
//!
//! Wraps the single opaque bearer token in browser local storage. Absence
//! is the expected pre-login state; writes overwrite unconditionally.

const TOKEN_KEY: &str = "access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored bearer token, if any.
pub fn token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Store a bearer token, replacing any previous value.
pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Revoke the session client-side. Wired to the sign-out control and called
/// when the backend rejects the token.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip() {
        clear_token();
        assert_eq!(token(), None);

        set_token("T");
        assert_eq!(token(), Some("T".to_string()));

        // Writes overwrite unconditionally
        set_token("U");
        assert_eq!(token(), Some("U".to_string()));

        clear_token();
        assert_eq!(token(), None);
    }
}
