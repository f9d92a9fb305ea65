//! Certification value object.

use serde::{Deserialize, Serialize};

/// Whether a certification is about the product line or anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationKind {
    /// Certification about the product line itself.
    Product,

    /// Any other credential (sales technique, management, etc.).
    General,
}

impl CertificationKind {
    /// Returns true for product-line certifications.
    pub fn is_product(&self) -> bool {
        matches!(self, CertificationKind::Product)
    }
}

/// A scored credential held by a salesperson.
///
/// The score is deliberately unconstrained: the grading scheme is external
/// to this model and negative scores are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    kind: CertificationKind,
    score: i32,
}

impl Certification {
    /// Creates a new certification.
    pub fn new(kind: CertificationKind, score: i32) -> Self {
        Self { kind, score }
    }

    /// Creates a product-line certification.
    pub fn product(score: i32) -> Self {
        Self::new(CertificationKind::Product, score)
    }

    /// Creates a general (non-product) certification.
    pub fn general(score: i32) -> Self {
        Self::new(CertificationKind::General, score)
    }

    /// Returns the certification kind.
    pub fn kind(&self) -> CertificationKind {
        self.kind
    }

    /// Returns true if this certification is about the product line.
    pub fn is_product(&self) -> bool {
        self.kind.is_product()
    }

    /// Returns the score.
    pub fn score(&self) -> i32 {
        self.score
    }
}
