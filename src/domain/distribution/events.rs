//! Distribution center domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CenterId, SalespersonId, SalespersonKind};

/// Events that can occur on a distribution center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CenterEvent {
    /// A salesperson joined the center's roster.
    SalespersonRegistered {
        center_id: CenterId,
        salesperson_id: SalespersonId,
        kind: SalespersonKind,
    },
}
