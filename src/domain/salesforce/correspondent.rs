//! CorrespondentBusiness - a business with branches in a fixed list of cities.

use serde::Serialize;
use std::rc::Rc;

use crate::domain::foundation::{SalespersonId, SalespersonKind};
use crate::domain::geography::{City, Province};

use super::{Certification, Salesperson, SalespersonBase};

/// Branch count at or above which a correspondent business is influential.
const INFLUENTIAL_MIN_BRANCHES: usize = 5;

/// Distinct-province count at or above which a correspondent business is
/// influential.
const INFLUENTIAL_MIN_PROVINCES: usize = 3;

/// A business selling through branches in a fixed list of cities.
///
/// The branch list is set at construction. The provinces those branches
/// reach are derived once, deduplicated, in first-occurrence order, and stay
/// consistent with the branch list for the object's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct CorrespondentBusiness {
    base: SalespersonBase,
    cities: Vec<Rc<City>>,
    authorized_provinces: Vec<Rc<Province>>,
}

impl CorrespondentBusiness {
    /// Creates a new correspondent business with branches in the given cities.
    pub fn new(cities: Vec<Rc<City>>) -> Self {
        let mut authorized_provinces: Vec<Rc<Province>> = Vec::new();
        for city in &cities {
            if !authorized_provinces.contains(city.province()) {
                authorized_provinces.push(Rc::clone(city.province()));
            }
        }
        Self {
            base: SalespersonBase::new(),
            cities,
            authorized_provinces,
        }
    }

    /// Returns the branch cities, as given at construction.
    pub fn cities(&self) -> &[Rc<City>] {
        &self.cities
    }

    /// Returns the distinct provinces the branches reach, in
    /// first-occurrence order.
    pub fn authorized_provinces(&self) -> &[Rc<Province>] {
        &self.authorized_provinces
    }

    /// Returns true for a wide footprint: at least 5 branches, or branches
    /// across at least 3 distinct provinces.
    pub fn is_influential(&self) -> bool {
        self.cities.len() >= INFLUENTIAL_MIN_BRANCHES
            || self.authorized_provinces.len() >= INFLUENTIAL_MIN_PROVINCES
    }
}

impl Salesperson for CorrespondentBusiness {
    fn id(&self) -> SalespersonId {
        self.base.id()
    }

    fn kind(&self) -> SalespersonKind {
        SalespersonKind::Correspondent
    }

    fn can_serve(&self, city: &City) -> bool {
        self.cities.iter().any(|c| c.as_ref() == city)
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
