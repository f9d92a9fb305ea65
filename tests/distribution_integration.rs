//! End-to-end scenario over the public API: a distribution center staffed
//! with all three salesperson variants, evolving as certifications arrive.

use std::rc::Rc;

use sales_network::domain::distribution::{CenterError, CenterEvent, DistributionCenter};
use sales_network::domain::geography::{City, Province};
use sales_network::domain::salesforce::{
    Certification, CorrespondentBusiness, FixedSalesperson, Salesperson, SalespersonVariant,
    TravelingSalesperson,
};

struct Network {
    north: Rc<Province>,
    highlands: Rc<Province>,
    coast: Rc<Province>,
    riverton: Rc<City>,
    hillcrest: Rc<City>,
    stonebridge: Rc<City>,
    port_arden: Rc<City>,
    seaview: Rc<City>,
}

fn network() -> Network {
    let north = Rc::new(Province::new(1_300_000));
    let highlands = Rc::new(Province::new(535_303));
    let coast = Rc::new(Province::new(506_668));
    Network {
        riverton: Rc::new(City::new(Rc::clone(&north))),
        hillcrest: Rc::new(City::new(Rc::clone(&highlands))),
        stonebridge: Rc::new(City::new(Rc::clone(&highlands))),
        port_arden: Rc::new(City::new(Rc::clone(&coast))),
        seaview: Rc::new(City::new(Rc::clone(&coast))),
        north,
        highlands,
        coast,
    }
}

#[test]
fn variants_apply_their_own_coverage_rules() {
    let net = network();

    let fixed = FixedSalesperson::new(Rc::clone(&net.riverton));
    assert!(fixed.can_serve(&net.riverton));
    assert!(!fixed.can_serve(&net.hillcrest));

    let traveling = TravelingSalesperson::new(vec![Rc::clone(&net.north)]);
    let other_northern_city = City::new(Rc::clone(&net.north));
    assert!(traveling.can_serve(&other_northern_city));
    assert!(!traveling.can_serve(&net.port_arden));
    // 1.3M residents is nowhere near the ten-million bar.
    assert!(!traveling.is_influential());

    let correspondent = CorrespondentBusiness::new(vec![
        Rc::clone(&net.hillcrest),
        Rc::clone(&net.seaview),
        Rc::clone(&net.port_arden),
        Rc::clone(&net.riverton),
    ]);
    assert!(correspondent.can_serve(&net.hillcrest));
    assert!(!correspondent.can_serve(&net.stonebridge));
    // Four branches, but spread over three provinces.
    assert!(correspondent.is_influential());
    assert_eq!(
        correspondent.authorized_provinces().to_vec(),
        vec![
            Rc::clone(&net.highlands),
            Rc::clone(&net.coast),
            Rc::clone(&net.north),
        ]
    );
}

#[test]
fn center_roster_evolves_with_certifications() {
    let net = network();
    let mut center = DistributionCenter::new(Rc::clone(&net.hillcrest));

    let generalist: Rc<SalespersonVariant> =
        Rc::new(FixedSalesperson::new(Rc::clone(&net.riverton)).into());
    generalist.add_certification(Certification::general(5));

    let local: Rc<SalespersonVariant> =
        Rc::new(FixedSalesperson::new(Rc::clone(&net.port_arden)).into());

    let rover: Rc<SalespersonVariant> = Rc::new(
        TravelingSalesperson::new(vec![
            Rc::clone(&net.coast),
            Rc::clone(&net.north),
            Rc::clone(&net.highlands),
        ])
        .into(),
    );

    center.register_salesperson(Rc::clone(&generalist)).unwrap();
    center.register_salesperson(Rc::clone(&local)).unwrap();
    center.register_salesperson(Rc::clone(&rover)).unwrap();

    // Re-registering the same salesperson is rejected and changes nothing.
    assert_eq!(
        center.register_salesperson(Rc::clone(&rover)),
        Err(CenterError::DuplicateRegistration { id: rover.id() })
    );
    assert_eq!(center.roster_size(), 3);

    // Nobody reaches the firm threshold yet.
    assert!(!center.is_robust());

    // Only the generalist holds a non-product certification.
    let generics = center.generic_salespeople();
    assert_eq!(generics.len(), 1);
    assert_eq!(generics[0].id(), generalist.id());

    // The rover overtakes the generalist once certified.
    rover.add_certification(Certification::product(10));
    assert_eq!(center.star_salesperson().unwrap().id(), rover.id());

    // The rover's provinces include the coast, so its cities are covered.
    assert!(center.can_cover(&net.seaview));

    // A later, bigger certification crowns a new star.
    local.add_certification(Certification::product(20));
    assert_eq!(center.star_salesperson().unwrap().id(), local.id());

    // One registration event per successful add, in order.
    let events = center.take_events();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        &events[0],
        CenterEvent::SalespersonRegistered { salesperson_id, .. }
            if *salesperson_id == generalist.id()
    ));
}

#[test]
fn roster_serializes_in_registration_order() {
    let net = network();
    let mut center = DistributionCenter::new(Rc::clone(&net.hillcrest));

    let first: Rc<SalespersonVariant> =
        Rc::new(FixedSalesperson::new(Rc::clone(&net.hillcrest)).into());
    let second: Rc<SalespersonVariant> =
        Rc::new(TravelingSalesperson::new(vec![Rc::clone(&net.north)]).into());
    center.register_salesperson(Rc::clone(&first)).unwrap();
    center.register_salesperson(Rc::clone(&second)).unwrap();

    let json = serde_json::to_value(center.roster()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].get("Fixed").is_some());
    assert!(entries[1].get("Traveling").is_some());
}
