//! Session state shared across the component tree.
//!
//! The session starts out [`SessionState::Loading`] while the app asks the API who is signed
//! in, then settles on [`SessionState::Authenticated`] or [`SessionState::Anonymous`]. Every
//! route guard reads the same [`Session`] handle, so all of them observe one transition.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::{client::error::ClientError, model::user::UserDto};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// The session check has not finished yet
    Loading,
    Authenticated(UserDto),
    Anonymous,
}

impl SessionState {
    /// Maps the result of the session check onto a settled state
    ///
    /// A failed check settles as anonymous rather than surfacing an error.
    pub fn from_fetch(result: Result<Option<UserDto>, ClientError>) -> Self {
        match result {
            Ok(Some(user)) => SessionState::Authenticated(user),
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                warn!("Session check failed, continuing as anonymous: {}", err);
                SessionState::Anonymous
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Anonymous => None,
        }
    }
}

/// Handle to the process-wide session, provided once at the app root
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    pub fn new(state: Signal<SessionState>) -> Self {
        Self { state }
    }

    /// Current state, subscribing the calling component to future transitions
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Settles the session from the result of the session check
    pub fn resolve(&self, result: Result<Option<UserDto>, ClientError>) {
        let next = SessionState::from_fetch(result);
        if let Some(user) = next.user() {
            info!("Session resolved for user {}", user.id);
        } else {
            info!("Session resolved as anonymous");
        }

        let mut state = self.state;
        state.set(next);
    }

    pub fn sign_out(&self) {
        let mut state = self.state;
        state.set(SessionState::Anonymous);
    }
}
