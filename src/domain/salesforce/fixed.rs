//! FixedSalesperson - a salesperson tied to a single home city.

use serde::Serialize;
use std::rc::Rc;

use crate::domain::foundation::{SalespersonId, SalespersonKind};
use crate::domain::geography::City;

use super::{Certification, Salesperson, SalespersonBase};

/// A salesperson who only serves their home city.
#[derive(Debug, Clone, Serialize)]
pub struct FixedSalesperson {
    base: SalespersonBase,
    home_city: Rc<City>,
}

impl FixedSalesperson {
    /// Creates a new fixed salesperson based in the given city.
    pub fn new(home_city: Rc<City>) -> Self {
        Self {
            base: SalespersonBase::new(),
            home_city,
        }
    }

    /// Returns the home city.
    pub fn home_city(&self) -> &Rc<City> {
        &self.home_city
    }

    /// A fixed salesperson never has broad market reach.
    pub fn is_influential(&self) -> bool {
        false
    }
}

impl Salesperson for FixedSalesperson {
    fn id(&self) -> SalespersonId {
        self.base.id()
    }

    fn kind(&self) -> SalespersonKind {
        SalespersonKind::Fixed
    }

    fn can_serve(&self, city: &City) -> bool {
        self.home_city.as_ref() == city
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
