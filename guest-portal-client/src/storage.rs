use gloo_storage::{SessionStorage, Storage};

use guest_portal_common::user::{Session, UserType};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_TYPE_KEY: &str = "user_type";

/// Read the persisted session from browser session storage. Returns [None]
/// unless all three keys are present and the stored role parses to a known
/// [UserType].
pub fn load_session() -> Option<Session> {
    let access_token = SessionStorage::get(ACCESS_TOKEN_KEY).ok()?;
    let refresh_token = SessionStorage::get(REFRESH_TOKEN_KEY).ok()?;
    let user_type: String = SessionStorage::get(USER_TYPE_KEY).ok()?;
    let user_type: UserType = user_type.parse().ok()?;
    Some(Session {
        access_token,
        refresh_token,
        user_type,
    })
}

/// Persist a freshly created session to browser session storage
/// # Errors
/// This function will return an error if the browser rejects a storage write
pub fn save_session(session: &Session) -> gloo_storage::Result<()> {
    SessionStorage::set(ACCESS_TOKEN_KEY, &session.access_token)?;
    SessionStorage::set(REFRESH_TOKEN_KEY, &session.refresh_token)?;
    SessionStorage::set(USER_TYPE_KEY, session.user_type.as_ref())?;
    Ok(())
}

/// Remove every session key. Safe to call when no session is stored.
pub fn clear_session() {
    SessionStorage::delete(ACCESS_TOKEN_KEY);
    SessionStorage::delete(REFRESH_TOKEN_KEY);
    SessionStorage::delete(USER_TYPE_KEY);
}
