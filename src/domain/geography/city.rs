//! City entity.

use serde::Serialize;
use std::rc::Rc;

use crate::domain::foundation::CityId;

use super::Province;

/// A city belonging to exactly one province.
///
/// Like [`Province`], cities compare by identity, not by attributes.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    id: CityId,
    province: Rc<Province>,
}

impl City {
    /// Creates a new city in the given province.
    pub fn new(province: Rc<Province>) -> Self {
        Self {
            id: CityId::new(),
            province,
        }
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> CityId {
        self.id
    }

    /// Returns the province this city belongs to.
    pub fn province(&self) -> &Rc<Province> {
        &self.province
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for City {}

impl std::hash::Hash for City {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
