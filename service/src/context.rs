//! Request context: who is acting, and against which store.

use haul_core::RecordId;
use haul_store::Store;

/// The identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// A service member acting on their own move.
    Customer { service_member_id: RecordId },
    /// Office staff reviewing submissions.
    Reviewer { office_user_id: RecordId },
    /// Internal callers without a user session.
    Anonymous,
}

impl Actor {
    pub fn is_customer(&self) -> bool {
        matches!(self, Actor::Customer { .. })
    }

    /// True if records owned by `owner` are visible to this actor.
    pub fn can_access(&self, owner: RecordId) -> bool {
        match self {
            Actor::Customer { service_member_id } => *service_member_id == owner,
            Actor::Reviewer { .. } | Actor::Anonymous => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    actor: Actor,
}

impl Session {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }

    pub fn customer(service_member_id: RecordId) -> Self {
        Self::new(Actor::Customer { service_member_id })
    }

    pub fn reviewer(office_user_id: RecordId) -> Self {
        Self::new(Actor::Reviewer { office_user_id })
    }

    pub fn anonymous() -> Self {
        Self::new(Actor::Anonymous)
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }
}

/// A store plus the session of the request using it.
pub struct AppContext<'a, S> {
    store: &'a mut S,
    session: Session,
}

impl<'a, S: Store> AppContext<'a, S> {
    pub fn new(store: &'a mut S, session: Session) -> Self {
        Self { store, session }
    }

    pub fn store(&self) -> &S {
        self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        self.store
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn actor(&self) -> Actor {
        self.session.actor()
    }
}
