//! Discriminant for the three salesperson variants.

use serde::{Deserialize, Serialize};

/// The kind of a salesperson, independent of its state.
///
/// Each kind decides city coverage differently: a fixed salesperson serves
/// only its home city, a traveling salesperson serves any city in its
/// authorized provinces, and a correspondent business serves the cities it
/// has branches in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalespersonKind {
    /// Tied to a single home city.
    Fixed,

    /// Covers whole provinces.
    Traveling,

    /// A business with branches in a fixed list of cities.
    Correspondent,
}

impl SalespersonKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            SalespersonKind::Fixed => "Fixed Salesperson",
            SalespersonKind::Traveling => "Traveling Salesperson",
            SalespersonKind::Correspondent => "Correspondent Business",
        }
    }
}

impl std::fmt::Display for SalespersonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_matches_kind() {
        assert_eq!(SalespersonKind::Fixed.display_name(), "Fixed Salesperson");
        assert_eq!(
            SalespersonKind::Traveling.display_name(),
            "Traveling Salesperson"
        );
        assert_eq!(
            SalespersonKind::Correspondent.display_name(),
            "Correspondent Business"
        );
    }

    #[test]
    fn kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&SalespersonKind::Correspondent).unwrap();
        assert_eq!(json, "\"correspondent\"");
    }
}
