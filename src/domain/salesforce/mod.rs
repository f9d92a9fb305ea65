//! Salesforce module - certifications, the Salesperson capability, and its
//! three variants.
//!
//! This module defines:
//! - The `Certification` value object and its kind
//! - The `Salesperson` trait every variant implements
//! - The `SalespersonBase` struct holding shared certification state
//! - The 3 concrete variants (FixedSalesperson, TravelingSalesperson,
//!   CorrespondentBusiness)
//! - The `SalespersonVariant` enum for pattern matching and storage

mod certification;
mod correspondent;
mod fixed;
mod salesperson;
mod traveling;
mod variant;

pub use certification::{Certification, CertificationKind};
pub use correspondent::CorrespondentBusiness;
pub use fixed::FixedSalesperson;
pub use salesperson::{Salesperson, SalespersonBase, FIRM_SCORE_THRESHOLD};
pub use traveling::TravelingSalesperson;
pub use variant::SalespersonVariant;
