//! Session presence: whether a previously saved identifier exists.

use serde::Serialize;

use crate::preferences::{PreferenceKey, Preferences};

/// A session is present when the stored id exists and is non-empty.
pub fn is_session_present(id: Option<&str>) -> bool {
    id.is_some_and(|id| !id.is_empty())
}

pub fn presence_of(prefs: &Preferences) -> bool {
    is_session_present(prefs.get(PreferenceKey::Id))
}

/// Which session write an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOp {
    Login,
    Logout,
}

impl std::fmt::Display for SessionOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOp::Login => f.write_str("login"),
            SessionOp::Logout => f.write_str("logout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_missing_id_is_no_session() {
        assert!(!is_session_present(None));
        assert!(!is_session_present(Some("")));
        assert!(is_session_present(Some("user0001")));
    }

    #[test]
    fn presence_reads_the_id_key_only() {
        let mut prefs = Preferences::new();
        prefs.set(PreferenceKey::Email, "a@b.com");
        assert!(!presence_of(&prefs));
        prefs.set(PreferenceKey::Id, "user0001");
        assert!(presence_of(&prefs));
    }
}
