use restobooks_core::{Entity, SessionId};

use crate::store::Ledger;

/// One interactive bookkeeping session.
///
/// The session is the sole owner of its ledger: created empty at startup,
/// mutated only through the accounting engine, and discarded on exit. Nothing
/// survives a restart. Multi-session deployments would hold one `Session` per
/// `SessionId` and change nothing below this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    ledger: Ledger,
}

impl Session {
    /// Start a fresh session with an empty ledger.
    pub fn start() -> Self {
        Self::with_id(SessionId::new())
    }

    /// Start a session under a caller-chosen id (useful in tests).
    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            ledger: Ledger::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mutable handle for the engine's append path.
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }
}

impl Entity for Session {
    type Id = SessionId;

    fn id(&self) -> &SessionId {
        &self.id
    }
}
