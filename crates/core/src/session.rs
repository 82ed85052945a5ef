use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::booking::{BookingProposal, SessionId};

/// Transient keyed store for in-flight negotiation proposals. One mutex
/// guards the map: `insert`, `take` and `get` hold it for the map access
/// only, while `with_session` runs the caller's mutation under it so a
/// concurrent modify or confirm on the same session can never interleave
/// with a read-modify-write gap. `take` decides the single confirm
/// winner. No expiry: abandoned proposals live until process restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<SessionId, BookingProposal>>,
}

impl SessionStore {
    /// Stores the proposal under a freshly minted session id. Repeated
    /// previews for the same user never collide or overwrite.
    pub fn insert(&self, proposal: BookingProposal) -> SessionId {
        let id = SessionId::generate();
        self.lock().insert(id.clone(), proposal);
        id
    }

    /// Runs `mutate` on the stored proposal under the lock. `None` when
    /// the session never existed or was already consumed.
    pub fn with_session<T>(
        &self,
        id: &SessionId,
        mutate: impl FnOnce(&mut BookingProposal) -> T,
    ) -> Option<T> {
        self.lock().get_mut(id).map(mutate)
    }

    /// Consumes the session. At most one caller ever gets the proposal.
    pub fn take(&self, id: &SessionId) -> Option<BookingProposal> {
        self.lock().remove(id)
    }

    pub fn get(&self, id: &SessionId) -> Option<BookingProposal> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<SessionId, BookingProposal>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
