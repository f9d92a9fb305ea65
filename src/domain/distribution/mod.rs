//! Distribution module - the DistributionCenter aggregate.
//!
//! # Module Structure
//!
//! - `center` - DistributionCenter aggregate root
//! - `errors` - CenterError
//! - `events` - CenterEvent domain events

mod center;
mod errors;
mod events;

pub use center::DistributionCenter;
pub use errors::CenterError;
pub use events::CenterEvent;
