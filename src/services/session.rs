//! Session persistence in localStorage.
//!
//! The token is stored raw under `token`; the user profile is stored as JSON
//! under `user`. A session is restored only when both keys are present and
//! the user parses, which keeps the user/token invariant across restarts.

use crate::models::{Session, User};
use crate::utils::storage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

pub fn save_session(session: &Session) {
    if let Some(local) = storage::get_local_storage() {
        let _ = local.set_item(TOKEN_KEY, &session.token);
    }
    if let Err(e) = storage::save_to_storage(USER_KEY, &session.user) {
        log::error!("failed to persist user profile: {}", e);
    }
}

pub fn load_session() -> Option<Session> {
    let local = storage::get_local_storage()?;
    let token = local.get_item(TOKEN_KEY).ok()??;
    let user: User = storage::load_from_storage(USER_KEY)?;
    Some(Session { user, token })
}

pub fn clear_session() {
    if let Some(local) = storage::get_local_storage() {
        let _ = local.remove_item(TOKEN_KEY);
        let _ = local.remove_item(USER_KEY);
    }
}

// Browser-only: localStorage does not exist off wasm32. Run with
// `wasm-pack test --headless --chrome`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_session() -> Session {
        Session {
            user: User {
                id: "u-1".to_string(),
                username: "amina".to_string(),
                email: "amina@example.com".to_string(),
                business_name: None,
                sector: "it".to_string(),
                location: "Nairobi".to_string(),
                language: "en".to_string(),
            },
            token: "jwt-abc".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn session_round_trips_through_local_storage() {
        let session = sample_session();
        save_session(&session);
        assert_eq!(load_session(), Some(session));

        clear_session();
        assert!(load_session().is_none());
    }

    #[wasm_bindgen_test]
    fn token_alone_does_not_restore_a_session() {
        clear_session();
        if let Some(local) = storage::get_local_storage() {
            let _ = local.set_item("token", "orphan-token");
        }
        assert!(load_session().is_none());
        clear_session();
    }
}
