//! Identity store: active session and the mock credential registry.
//!
//! # Responsibility
//! - Represent zero-or-one active session identity.
//! - Authenticate against the in-memory registry.
//! - Persist the session projection across restarts.
//!
//! # Invariants
//! - State machine is `Unresolved -> {Authenticated, Anonymous}`; consumers
//!   must not treat `Unresolved` as `Anonymous`.
//! - A failed login leaves both state and session unchanged.
//! - Registry growth from signup is in-memory only; new accounts do not
//!   survive a restart independent of the session record.

use crate::clock::{Clock, IdWell};
use crate::model::user::{SessionUser, UserAccount};
use crate::repo::kv_repo::KvRepository;
use crate::store::SESSION_KEY;
use log::{error, info, warn};

/// Resolution state of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Startup phase; the persisted record has not been consulted yet.
    Unresolved,
    /// No active session.
    Anonymous,
    /// A session identity is active.
    Authenticated,
}

/// Owner of the active-session identity and the credential registry.
pub struct IdentityStore<R: KvRepository> {
    repo: R,
    clock: Box<dyn Clock>,
    ids: IdWell,
    registry: Vec<UserAccount>,
    session: Option<SessionUser>,
    state: SessionState,
}

impl<R: KvRepository> IdentityStore<R> {
    /// Builds the store in the `Unresolved` state.
    ///
    /// Call [`resolve`](Self::resolve) before consulting the session; route
    /// guards must suspend rendering until then.
    pub fn new(repo: R, registry: Vec<UserAccount>, clock: Box<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            ids: IdWell::new(),
            registry,
            session: None,
            state: SessionState::Unresolved,
        }
    }

    /// Reads the persisted session record and leaves `Unresolved`.
    ///
    /// A well-formed record transitions to `Authenticated`; an absent one
    /// to `Anonymous`. A corrupt record is deleted from storage and treated
    /// as absent.
    pub fn resolve(&mut self) {
        match self.repo.read(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => {
                    info!(
                        "event=session_resolved module=identity status=ok user_id={}",
                        user.id
                    );
                    self.session = Some(user);
                    self.state = SessionState::Authenticated;
                }
                Err(err) => {
                    warn!(
                        "event=session_resolved module=identity status=corrupt error={err}"
                    );
                    if let Err(err) = self.repo.delete(SESSION_KEY) {
                        error!(
                            "event=session_cleanup module=identity status=error error={err}"
                        );
                    }
                    self.state = SessionState::Anonymous;
                }
            },
            Ok(None) => {
                self.state = SessionState::Anonymous;
            }
            Err(err) => {
                warn!("event=session_resolved module=identity status=error error={err}");
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Authenticates against the registry.
    ///
    /// Email matching is exact and case-sensitive; the password is checked
    /// against the account's salted digest. On success the session
    /// projection is persisted and the state becomes `Authenticated`; on
    /// failure nothing changes. No lockout, no rate limiting.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let account = self
            .registry
            .iter()
            .find(|account| account.email == email && account.verify_password(password));

        match account {
            Some(account) => {
                let session = account.session_projection();
                info!(
                    "event=login module=identity status=ok user_id={}",
                    session.id
                );
                self.persist_session(&session);
                self.session = Some(session);
                self.state = SessionState::Authenticated;
                true
            }
            None => {
                warn!("event=login module=identity status=rejected email={email}");
                false
            }
        }
    }

    /// Registers a new account and signs it in.
    ///
    /// Fails when the email is already registered. The registry entry
    /// itself is not persisted (documented scoping limitation); only the
    /// session projection is written to storage.
    pub fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
        if self.registry.iter().any(|account| account.email == email) {
            warn!("event=signup module=identity status=rejected reason=duplicate_email email={email}");
            return false;
        }

        let id = self.ids.next_ms(self.clock.now_utc().timestamp_millis());
        let account =
            UserAccount::with_password(id, name, email, password, format!("signup-{id}"));
        let session = account.session_projection();
        self.registry.push(account);

        info!("event=signup module=identity status=ok user_id={id}");
        self.persist_session(&session);
        self.session = Some(session);
        self.state = SessionState::Authenticated;
        true
    }

    /// Clears the persisted session record and transitions to `Anonymous`.
    pub fn logout(&mut self) {
        if let Err(err) = self.repo.delete(SESSION_KEY) {
            error!("event=logout module=identity status=error error={err}");
        } else {
            info!("event=logout module=identity status=ok");
        }
        self.session = None;
        self.state = SessionState::Anonymous;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    fn persist_session(&self, session: &SessionUser) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(err) => {
                error!(
                    "event=session_write module=identity status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.repo.write(SESSION_KEY, &json) {
            // Fire-and-forget: the in-memory session stays authoritative
            // for the rest of this process.
            error!(
                "event=session_write module=identity status=error error_code=write_failed error={err}"
            );
        }
    }
}
