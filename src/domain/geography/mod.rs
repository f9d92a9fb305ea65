//! Geography entities: provinces and the cities that belong to them.
//!
//! # Module Structure
//!
//! - `province` - Province entity (population)
//! - `city` - City entity (belongs to exactly one province)

mod city;
mod province;

pub use city::City;
pub use province::Province;
