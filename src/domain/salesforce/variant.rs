//! SalespersonVariant - sum type over the three salesperson variants.

use serde::Serialize;

use crate::domain::foundation::{SalespersonId, SalespersonKind};
use crate::domain::geography::City;

use super::{
    Certification, CorrespondentBusiness, FixedSalesperson, Salesperson, TravelingSalesperson,
};

/// Sum type for all salesperson variants.
///
/// Distribution centers store their roster as this type so a single
/// collection can mix variants. Note that `is_influential` is deliberately
/// absent: it is not part of the shared contract, so callers who need it
/// must match on the variant.
#[derive(Debug, Clone, Serialize)]
pub enum SalespersonVariant {
    Fixed(FixedSalesperson),
    Traveling(TravelingSalesperson),
    Correspondent(CorrespondentBusiness),
}

impl From<FixedSalesperson> for SalespersonVariant {
    fn from(salesperson: FixedSalesperson) -> Self {
        SalespersonVariant::Fixed(salesperson)
    }
}

impl From<TravelingSalesperson> for SalespersonVariant {
    fn from(salesperson: TravelingSalesperson) -> Self {
        SalespersonVariant::Traveling(salesperson)
    }
}

impl From<CorrespondentBusiness> for SalespersonVariant {
    fn from(business: CorrespondentBusiness) -> Self {
        SalespersonVariant::Correspondent(business)
    }
}

impl Salesperson for SalespersonVariant {
    fn id(&self) -> SalespersonId {
        match self {
            SalespersonVariant::Fixed(s) => s.id(),
            SalespersonVariant::Traveling(s) => s.id(),
            SalespersonVariant::Correspondent(s) => s.id(),
        }
    }

    fn kind(&self) -> SalespersonKind {
        match self {
            SalespersonVariant::Fixed(s) => s.kind(),
            SalespersonVariant::Traveling(s) => s.kind(),
            SalespersonVariant::Correspondent(s) => s.kind(),
        }
    }

    fn can_serve(&self, city: &City) -> bool {
        match self {
            SalespersonVariant::Fixed(s) => s.can_serve(city),
            SalespersonVariant::Traveling(s) => s.can_serve(city),
            SalespersonVariant::Correspondent(s) => s.can_serve(city),
        }
    }

    fn add_certification(&self, certification: Certification) {
        match self {
            SalespersonVariant::Fixed(s) => s.add_certification(certification),
            SalespersonVariant::Traveling(s) => s.add_certification(certification),
            SalespersonVariant::Correspondent(s) => s.add_certification(certification),
        }
    }

    fn certification_count(&self) -> usize {
        match self {
            SalespersonVariant::Fixed(s) => s.certification_count(),
            SalespersonVariant::Traveling(s) => s.certification_count(),
            SalespersonVariant::Correspondent(s) => s.certification_count(),
        }
    }

    fn product_certification_count(&self) -> usize {
        match self {
            SalespersonVariant::Fixed(s) => s.product_certification_count(),
            SalespersonVariant::Traveling(s) => s.product_certification_count(),
            SalespersonVariant::Correspondent(s) => s.product_certification_count(),
        }
    }

    fn other_certification_count(&self) -> usize {
        match self {
            SalespersonVariant::Fixed(s) => s.other_certification_count(),
            SalespersonVariant::Traveling(s) => s.other_certification_count(),
            SalespersonVariant::Correspondent(s) => s.other_certification_count(),
        }
    }

    fn total_certification_score(&self) -> i32 {
        match self {
            SalespersonVariant::Fixed(s) => s.total_certification_score(),
            SalespersonVariant::Traveling(s) => s.total_certification_score(),
            SalespersonVariant::Correspondent(s) => s.total_certification_score(),
        }
    }

    fn is_firm(&self) -> bool {
        match self {
            SalespersonVariant::Fixed(s) => s.is_firm(),
            SalespersonVariant::Traveling(s) => s.is_firm(),
            SalespersonVariant::Correspondent(s) => s.is_firm(),
        }
    }

    fn is_versatile(&self) -> bool {
        match self {
            SalespersonVariant::Fixed(s) => s.is_versatile(),
            SalespersonVariant::Traveling(s) => s.is_versatile(),
            SalespersonVariant::Correspondent(s) => s.is_versatile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geography::Province;
    use std::rc::Rc;

    #[test]
    fn variant_reports_the_wrapped_kind() {
        let province = Rc::new(Province::new(1_000));
        let city = Rc::new(City::new(Rc::clone(&province)));

        let fixed: SalespersonVariant = FixedSalesperson::new(Rc::clone(&city)).into();
        let traveling: SalespersonVariant =
            TravelingSalesperson::new(vec![Rc::clone(&province)]).into();
        let correspondent: SalespersonVariant =
            CorrespondentBusiness::new(vec![Rc::clone(&city)]).into();

        assert_eq!(fixed.kind(), SalespersonKind::Fixed);
        assert_eq!(traveling.kind(), SalespersonKind::Traveling);
        assert_eq!(correspondent.kind(), SalespersonKind::Correspondent);
    }

    #[test]
    fn variant_delegates_coverage_to_the_wrapped_salesperson() {
        let province = Rc::new(Province::new(1_000));
        let home = Rc::new(City::new(Rc::clone(&province)));
        let other = City::new(Rc::clone(&province));

        let variant: SalespersonVariant = FixedSalesperson::new(Rc::clone(&home)).into();
        assert!(variant.can_serve(&home));
        assert!(!variant.can_serve(&other));
    }

    #[test]
    fn variant_delegates_certification_queries() {
        let province = Rc::new(Province::new(1_000));
        let variant: SalespersonVariant = TravelingSalesperson::new(vec![province]).into();
        variant.add_certification(Certification::product(20));
        variant.add_certification(Certification::general(15));

        assert_eq!(variant.certification_count(), 2);
        assert_eq!(variant.product_certification_count(), 1);
        assert_eq!(variant.other_certification_count(), 1);
        assert_eq!(variant.total_certification_score(), 35);
        assert!(variant.is_firm());
        assert!(!variant.is_versatile());
    }
}
