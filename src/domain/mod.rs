//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, discriminant enums)
//! - `geography` - Province and City entities
//! - `salesforce` - Certifications, the Salesperson capability, and its three variants
//! - `distribution` - DistributionCenter aggregate and its events/errors

pub mod distribution;
pub mod foundation;
pub mod geography;
pub mod salesforce;
