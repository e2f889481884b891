//! Route guard decision for the protected dashboard area.
//!
//! The three states map one-to-one onto what the layout renders: a spinner
//! while the persisted session is still being restored, a redirect to the
//! login screen when nobody is signed in, and the protected content
//! otherwise. Protected content is never rendered in the other two states.

use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authenticated,
}

pub fn guard_state(state: &SessionState) -> GuardState {
    if state.loading {
        GuardState::Loading
    } else if state.session.is_authenticated() {
        GuardState::Authenticated
    } else {
        GuardState::Unauthenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Identity, Session};

    fn signed_in() -> Session {
        Session {
            token: Some("h.p.s".to_string()),
            identity: Some(Identity {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                phone: String::new(),
                role: "admin".to_string(),
            }),
        }
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let state = SessionState {
            session: signed_in(),
            loading: true,
        };
        assert_eq!(guard_state(&state), GuardState::Loading);
    }

    #[test]
    fn test_resolved_states() {
        let authed = SessionState {
            session: signed_in(),
            loading: false,
        };
        assert_eq!(guard_state(&authed), GuardState::Authenticated);

        let anonymous = SessionState {
            session: Session::default(),
            loading: false,
        };
        assert_eq!(guard_state(&anonymous), GuardState::Unauthenticated);
    }
}
