//! Fetch coordination and the stale-response guard.
//!
//! Every issued query gets a fresh [`FetchId`]. Only the most recently issued
//! id is current; a response carrying any other id is stale and must not touch
//! visible state. Each id resolves at most once, so a single query generation
//! can commit at most one result.

use shelf_model::{FetchId, QueryDescriptor};

/// A fetch the runtime should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Sequence id to hand back with the response.
    pub id: FetchId,
    /// What to fetch.
    pub query: QueryDescriptor,
}

/// Lifecycle of the current fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Waiting on the catalog.
    InFlight,
    /// Resolved with a result.
    Succeeded,
    /// Resolved with an error.
    Failed,
}

/// How a response relates to the current fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The response belongs to the current fetch and may be committed.
    Current,
    /// The response was superseded (or already resolved) and must be dropped.
    Stale {
        /// Id of the fetch that is current now, if any.
        current: Option<FetchId>,
    },
}

#[derive(Debug, Clone)]
struct Current {
    id: FetchId,
    query: QueryDescriptor,
    status: FetchStatus,
}

/// Maps query descriptors to fetches and arbitrates which response may update
/// visible state.
#[derive(Debug, Clone)]
pub struct FetchCoordinator {
    last_id: FetchId,
    current: Option<Current>,
}

impl Default for FetchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchCoordinator {
    /// A coordinator that has issued nothing yet.
    pub fn new() -> Self {
        Self {
            last_id: FetchId(0),
            current: None,
        }
    }

    /// Id of the current fetch.
    pub fn current_id(&self) -> Option<FetchId> {
        self.current.as_ref().map(|c| c.id)
    }

    /// Descriptor of the current fetch.
    pub fn current_query(&self) -> Option<&QueryDescriptor> {
        self.current.as_ref().map(|c| &c.query)
    }

    /// Status of the current fetch.
    pub fn status(&self) -> Option<FetchStatus> {
        self.current.as_ref().map(|c| c.status)
    }

    /// Whether the current fetch is still waiting on the catalog.
    pub fn is_loading(&self) -> bool {
        self.status() == Some(FetchStatus::InFlight)
    }

    /// Issue a fetch for `query`, superseding whatever is current.
    ///
    /// A query equal to the current one is not reissued while it is in flight
    /// or after it succeeded. After a failure it is reissued.
    pub fn issue(&mut self, query: QueryDescriptor) -> Option<FetchRequest> {
        if let Some(current) = &self.current
            && current.query == query
            && current.status != FetchStatus::Failed
        {
            tracing::trace!(id = %current.id, "query unchanged, not reissuing");
            return None;
        }

        let id = self.last_id.next();
        self.last_id = id;

        if let Some(previous) = &self.current
            && previous.status == FetchStatus::InFlight
        {
            tracing::debug!(superseded = %previous.id, by = %id, "fetch superseded");
        }

        self.current = Some(Current {
            id,
            query: query.clone(),
            status: FetchStatus::InFlight,
        });

        Some(FetchRequest { id, query })
    }

    /// Judge a response for fetch `id` and mark the current fetch resolved.
    pub fn resolve(&mut self, id: FetchId, succeeded: bool) -> Verdict {
        match &mut self.current {
            Some(current) if current.id == id && current.status == FetchStatus::InFlight => {
                current.status = if succeeded {
                    FetchStatus::Succeeded
                } else {
                    FetchStatus::Failed
                };
                Verdict::Current
            }
            _ => Verdict::Stale {
                current: self.current_id(),
            },
        }
    }
}
