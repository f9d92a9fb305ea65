//! Province entity.

use serde::Serialize;

use crate::domain::foundation::ProvinceId;

/// A province with a resident population.
///
/// Provinces are immutable after creation and compare by identity: two
/// provinces with the same population are still distinct entities.
#[derive(Debug, Clone, Serialize)]
pub struct Province {
    id: ProvinceId,
    population: u64,
}

impl Province {
    /// Creates a new province with the given population.
    pub fn new(population: u64) -> Self {
        Self {
            id: ProvinceId::new(),
            population,
        }
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> ProvinceId {
        self.id
    }

    /// Returns the resident population.
    pub fn population(&self) -> u64 {
        self.population
    }
}

impl PartialEq for Province {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Province {}

impl std::hash::Hash for Province {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
