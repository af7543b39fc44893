use tessera_core::{Capability, PresenceData, PresenceSummary, TesseraError};

use crate::Tessera;
use crate::tessera_router_method;

impl Tessera {
    tessera_router_method! {
        /// Fetch the current presence snapshot for a chat user id.
        method: presence(user_id: &str) -> PresenceData,
        accessor: as_presence_provider,
        capability: Capability::Presence,
        not_found: "presence",
        call: presence
    }

    /// Fetch presence and derive the card view model.
    ///
    /// # Errors
    /// Same as [`Tessera::presence`].
    pub async fn presence_summary(&self, user_id: &str) -> Result<PresenceSummary, TesseraError> {
        let data = self.presence(user_id).await?;
        Ok(PresenceSummary::from_data(&data))
    }
}
