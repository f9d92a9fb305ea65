//! TravelingSalesperson - a salesperson covering whole provinces.

use serde::Serialize;
use std::rc::Rc;

use crate::domain::foundation::{SalespersonId, SalespersonKind};
use crate::domain::geography::{City, Province};

use super::{Certification, Salesperson, SalespersonBase};

/// Summed authorized-province population at or above which a traveling
/// salesperson counts as influential.
const INFLUENTIAL_POPULATION: u64 = 10_000_000;

/// A salesperson authorized to work anywhere in a fixed list of provinces.
///
/// The province list is set at construction and never changes. It is kept
/// exactly as given: order preserved, duplicates not removed.
#[derive(Debug, Clone, Serialize)]
pub struct TravelingSalesperson {
    base: SalespersonBase,
    authorized_provinces: Vec<Rc<Province>>,
}

impl TravelingSalesperson {
    /// Creates a new traveling salesperson for the given provinces.
    pub fn new(authorized_provinces: Vec<Rc<Province>>) -> Self {
        Self {
            base: SalespersonBase::new(),
            authorized_provinces,
        }
    }

    /// Returns the authorized provinces, as given at construction.
    pub fn authorized_provinces(&self) -> &[Rc<Province>] {
        &self.authorized_provinces
    }

    /// Returns true if the authorized provinces add up to at least ten
    /// million residents. A province listed twice is counted twice.
    pub fn is_influential(&self) -> bool {
        let total: u64 = self
            .authorized_provinces
            .iter()
            .map(|p| p.population())
            .sum();
        total >= INFLUENTIAL_POPULATION
    }
}

impl Salesperson for TravelingSalesperson {
    fn id(&self) -> SalespersonId {
        self.base.id()
    }

    fn kind(&self) -> SalespersonKind {
        SalespersonKind::Traveling
    }

    fn can_serve(&self, city: &City) -> bool {
        self.authorized_provinces.contains(city.province())
    }

    fn add_certification(&self, certification: Certification) {
        self.base.add_certification(certification);
    }

    fn certification_count(&self) -> usize {
        self.base.certification_count()
    }

    fn product_certification_count(&self) -> usize {
        self.base.product_certification_count()
    }

    fn other_certification_count(&self) -> usize {
        self.base.other_certification_count()
    }

    fn total_certification_score(&self) -> i32 {
        self.base.total_certification_score()
    }

    fn is_firm(&self) -> bool {
        self.base.is_firm()
    }

    fn is_versatile(&self) -> bool {
        self.base.is_versatile()
    }
}
