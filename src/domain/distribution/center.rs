//! DistributionCenter aggregate - the root entity for a sales roster.
//!
//! A DistributionCenter sits in one city and aggregates salespeople of any
//! variant. It answers derived queries over its roster: the star
//! salesperson, coverage of a city, generic salespeople, robustness.

use std::rc::Rc;
use tracing::debug;

use crate::domain::foundation::{CenterId, SalespersonId};
use crate::domain::geography::City;
use crate::domain::salesforce::{Salesperson, SalespersonVariant};

use super::{CenterError, CenterEvent};

/// Firm-member count at or above which a center is robust.
const ROBUST_MIN_FIRM: usize = 3;

/// The DistributionCenter aggregate root.
///
/// # Invariants
///
/// - The roster never contains the same salesperson twice (by identity).
/// - Roster order is registration order; this is what makes tie-breaking in
///   [`star_salesperson`](DistributionCenter::star_salesperson) deterministic.
/// - Membership only grows: no removal operation is exposed.
#[derive(Debug, Clone)]
pub struct DistributionCenter {
    id: CenterId,
    city: Rc<City>,
    roster: Vec<Rc<SalespersonVariant>>,
    domain_events: Vec<CenterEvent>,
}

impl DistributionCenter {
    /// Creates a new distribution center in the given city.
    pub fn new(city: Rc<City>) -> Self {
        Self {
            id: CenterId::new(),
            city,
            roster: Vec::new(),
            domain_events: Vec::new(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// Returns the unique identifier.
    pub fn id(&self) -> CenterId {
        self.id
    }

    /// Returns the city this center operates from.
    pub fn city(&self) -> &Rc<City> {
        &self.city
    }

    /// Returns the roster in registration order.
    pub fn roster(&self) -> &[Rc<SalespersonVariant>] {
        &self.roster
    }

    /// Returns the number of registered salespeople.
    pub fn roster_size(&self) -> usize {
        self.roster.len()
    }

    /// Drains and returns the domain events recorded so far.
    pub fn take_events(&mut self) -> Vec<CenterEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Commands
    // ───────────────────────────────────────────────────────────────

    /// Returns true if the given salesperson is on the roster.
    pub fn is_registered(&self, salesperson: &SalespersonVariant) -> bool {
        self.contains(salesperson.id())
    }

    /// Registers a salesperson on the roster.
    ///
    /// # Errors
    ///
    /// Returns [`CenterError::DuplicateRegistration`] if the salesperson is
    /// already registered; the roster is left unchanged.
    pub fn register_salesperson(
        &mut self,
        salesperson: Rc<SalespersonVariant>,
    ) -> Result<(), CenterError> {
        if self.contains(salesperson.id()) {
            return Err(CenterError::DuplicateRegistration {
                id: salesperson.id(),
            });
        }

        debug!(
            center_id = %self.id,
            salesperson_id = %salesperson.id(),
            kind = %salesperson.kind(),
            "salesperson registered"
        );
        self.record_event(CenterEvent::SalespersonRegistered {
            center_id: self.id,
            salesperson_id: salesperson.id(),
            kind: salesperson.kind(),
        });
        self.roster.push(salesperson);
        Ok(())
    }

    // ───────────────────────────────────────────────────────────────
    // Derived Queries
    // ───────────────────────────────────────────────────────────────

    /// Returns the member with the highest total certification score.
    /// Ties go to the earliest-registered member.
    ///
    /// # Errors
    ///
    /// Returns [`CenterError::EmptyRoster`] when no one is registered:
    /// an empty roster has no maximum.
    pub fn star_salesperson(&self) -> Result<Rc<SalespersonVariant>, CenterError> {
        let mut best: Option<&Rc<SalespersonVariant>> = None;
        for member in &self.roster {
            match best {
                None => best = Some(member),
                Some(current)
                    if member.total_certification_score()
                        > current.total_certification_score() =>
                {
                    best = Some(member)
                }
                _ => {}
            }
        }
        best.cloned().ok_or(CenterError::EmptyRoster)
    }

    /// Returns true if any member can serve the given city.
    pub fn can_cover(&self, city: &City) -> bool {
        self.roster.iter().any(|member| member.can_serve(city))
    }

    /// Returns the members holding at least one non-product certification,
    /// in registration order.
    pub fn generic_salespeople(&self) -> Vec<Rc<SalespersonVariant>> {
        self.roster
            .iter()
            .filter(|member| member.other_certification_count() > 0)
            .cloned()
            .collect()
    }

    /// Returns true if at least 3 members are firm.
    pub fn is_robust(&self) -> bool {
        self.roster
            .iter()
            .filter(|member| member.is_firm())
            .count()
            >= ROBUST_MIN_FIRM
    }

    // ───────────────────────────────────────────────────────────────
    // Internal Helpers
    // ───────────────────────────────────────────────────────────────

    fn contains(&self, id: SalespersonId) -> bool {
        self.roster.iter().any(|member| member.id() == id)
    }

    fn record_event(&mut self, event: CenterEvent) {
        self.domain_events.push(event);
    }
}
