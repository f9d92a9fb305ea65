//! Sales Network - In-Memory Sales Domain Model
//!
//! This crate models a small sales network: the provinces and cities a
//! salesperson can operate in, the scored certifications they hold, and the
//! distribution centers that aggregate salespeople and answer derived
//! queries (star salesperson, coverage, robustness).

pub mod domain;
