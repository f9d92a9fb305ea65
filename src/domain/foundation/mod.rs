//! Shared domain primitives.
//!
//! # Module Structure
//!
//! - `ids` - Strongly-typed identifiers for every entity
//! - `salesperson_kind` - Discriminant for the three salesperson variants

mod ids;
mod salesperson_kind;

pub use ids::{CenterId, CityId, ProvinceId, SalespersonId};
pub use salesperson_kind::SalespersonKind;
