use tessera_core::{ActivityEvent, Capability, ContributionEntry};

use crate::Tessera;
use crate::tessera_router_method;

impl Tessera {
    tessera_router_method! {
        /// Fetch raw contribution entries for a user from the primary source.
        ///
        /// Behavior and trade-offs:
        /// - Honors the builder's `FetchStrategy`: `PriorityWithFallback` tries
        ///   providers in order; `Latency` races them and returns the first success.
        /// - `NotFound` from every attempted provider maps to a single `NotFound`.
        method: contributions(user: &str) -> Vec<ContributionEntry>,
        accessor: as_contributions_provider,
        capability: Capability::Contributions,
        not_found: "contributions",
        call: contributions
    }

    tessera_router_method! {
        /// Fetch recent public events for a user from the secondary source.
        method: events(user: &str) -> Vec<ActivityEvent>,
        accessor: as_events_provider,
        capability: Capability::Events,
        not_found: "events",
        call: events
    }
}
