//! Salesperson trait and SalespersonBase shared state.

use serde::Serialize;
use std::cell::RefCell;
use tracing::debug;

use crate::domain::foundation::{SalespersonId, SalespersonKind};
use crate::domain::geography::City;

use super::Certification;

/// Total certification score at or above which a salesperson is "firm".
pub const FIRM_SCORE_THRESHOLD: i32 = 30;

/// Minimum number of certifications for a "versatile" salesperson.
const VERSATILE_MIN_CERTIFICATIONS: usize = 3;

/// Capability set shared by every salesperson variant.
///
/// `can_serve` is the single polymorphic rule — each variant decides city
/// coverage its own way. Everything else is a derived query over the
/// certification ledger and behaves identically across variants.
pub trait Salesperson {
    /// Returns the unique identifier.
    fn id(&self) -> SalespersonId;

    /// Returns the variant discriminant.
    fn kind(&self) -> SalespersonKind;

    /// Returns true if this salesperson can serve the given city.
    fn can_serve(&self, city: &City) -> bool;

    /// Appends a certification to the ledger. Duplicates are allowed.
    fn add_certification(&self, certification: Certification);

    /// Returns the number of certifications held.
    fn certification_count(&self) -> usize;

    /// Returns the number of product-line certifications held.
    fn product_certification_count(&self) -> usize;

    /// Returns the number of non-product certifications held.
    fn other_certification_count(&self) -> usize;

    /// Returns the sum of all certification scores (0 when none).
    fn total_certification_score(&self) -> i32;

    /// Returns true if the total certification score reaches
    /// [`FIRM_SCORE_THRESHOLD`].
    fn is_firm(&self) -> bool;

    /// Returns true for a broad, balanced portfolio: at least 3
    /// certifications, at least one of them product-line, at least one not.
    fn is_versatile(&self) -> bool;
}

/// Certification ledger and derived queries shared by all variants.
///
/// Each variant struct embeds one of these and delegates the shared half of
/// the [`Salesperson`] contract to it.
///
/// # Invariants
///
/// - The ledger only grows: certifications can be added, never removed.
/// - Insertion order is preserved.
///
/// Mutation goes through a `RefCell` so certifications can be added through
/// the shared `Rc` handle a distribution center holds. The type is therefore
/// `!Sync`; multi-threaded callers must synchronize externally.
#[derive(Debug, Clone, Serialize)]
pub struct SalespersonBase {
    id: SalespersonId,
    certifications: RefCell<Vec<Certification>>,
}

impl SalespersonBase {
    /// Creates a new base with an empty certification ledger.
    pub fn new() -> Self {
        Self {
            id: SalespersonId::new(),
            certifications: RefCell::new(Vec::new()),
        }
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> SalespersonId {
        self.id
    }

    /// Appends a certification to the ledger.
    pub fn add_certification(&self, certification: Certification) {
        debug!(
            salesperson_id = %self.id,
            kind = ?certification.kind(),
            score = certification.score(),
            "certification added"
        );
        self.certifications.borrow_mut().push(certification);
    }

    /// Returns a snapshot of the ledger in insertion order.
    pub fn certifications(&self) -> Vec<Certification> {
        self.certifications.borrow().clone()
    }

    /// Returns the number of certifications held.
    pub fn certification_count(&self) -> usize {
        self.certifications.borrow().len()
    }

    /// Returns the number of product-line certifications held.
    pub fn product_certification_count(&self) -> usize {
        self.certifications
            .borrow()
            .iter()
            .filter(|c| c.is_product())
            .count()
    }

    /// Returns the number of non-product certifications held.
    pub fn other_certification_count(&self) -> usize {
        self.certifications
            .borrow()
            .iter()
            .filter(|c| !c.is_product())
            .count()
    }

    /// Returns the sum of all certification scores.
    pub fn total_certification_score(&self) -> i32 {
        self.certifications.borrow().iter().map(|c| c.score()).sum()
    }

    /// Returns true if the total score reaches [`FIRM_SCORE_THRESHOLD`].
    pub fn is_firm(&self) -> bool {
        self.total_certification_score() >= FIRM_SCORE_THRESHOLD
    }

    /// Returns true for a portfolio of at least 3 certifications with at
    /// least one product-line and one general entry.
    pub fn is_versatile(&self) -> bool {
        self.certification_count() >= VERSATILE_MIN_CERTIFICATIONS
            && self.product_certification_count() >= 1
            && self.other_certification_count() >= 1
    }
}

impl Default for SalespersonBase {
    fn default() -> Self {
        Self::new()
    }
}
