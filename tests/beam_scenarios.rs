use beam_modeler::beam::node_layout;
use beam_modeler::prelude::*;
use beam_modeler::solver::SolverCall;

fn beam(text: &str) -> BeamDescription {
    text.parse().unwrap()
}

fn record(text: &str) -> RecordingSolver {
    BeamModelBuilder::new().build(&beam(text)).unwrap()
}

fn nodes(solver: &RecordingSolver) -> Vec<(String, f64)> {
    solver
        .calls()
        .iter()
        .filter_map(|call| match call {
            SolverCall::AddNode { id, x, .. } => Some((id.clone(), *x)),
            _ => None,
        })
        .collect()
}

#[test]
fn simply_supported_beam_has_two_pinned_nodes() {
    let solver = record("Simple\n10.0\n0.0P, 10.0P");

    assert_eq!(nodes(&solver), vec![("N0".to_string(), 0.0), ("N1".to_string(), 10.0)]);
    assert_eq!(solver.restraints_for("N0"), vec![RestraintVector::PIN]);
    assert_eq!(solver.restraints_for("N1"), vec![RestraintVector::PIN]);
}

#[test]
fn mixed_supports_follow_the_restraint_table() {
    let solver = record("Mixed\n10.0\n0.0R, 7.0P, 10.0F");

    assert_eq!(
        nodes(&solver),
        vec![
            ("N0".to_string(), 0.0),
            ("N1".to_string(), 7.0),
            ("N2".to_string(), 10.0)
        ]
    );
    // Rigid already covers the pin at the origin
    assert_eq!(solver.restraints_for("N0"), vec![RestraintVector::RIGID]);
    assert_eq!(solver.restraints_for("N1"), vec![RestraintVector::PIN]);
    assert_eq!(solver.restraints_for("N2"), vec![RestraintVector::FIXED]);
}

#[test]
fn origin_policy_decides_declared_origin_restraint() {
    let description = beam("Mixed\n10.0\n0.0F, 10.0P");
    let restraint_at_origin = |policy| {
        let options = BuildOptions::default().with_origin_restraint(policy);
        BeamModelBuilder::with_options(options)
            .plan(&description)
            .unwrap()
            .restraint_for("N0")
            .unwrap()
    };

    assert_eq!(
        restraint_at_origin(OriginRestraint::Union),
        RestraintVector([true, true, true, true, false, false])
    );
    assert_eq!(restraint_at_origin(OriginRestraint::DeclaredWins), RestraintVector::FIXED);
    assert_eq!(restraint_at_origin(OriginRestraint::PinWins), RestraintVector::PIN);
}

#[test]
fn declared_origin_code_replaces_the_pin_by_default() {
    let solver = record("Mixed\n10.0\n0.0F, 10.0P");

    assert_eq!(solver.restraints_for("N0"), vec![RestraintVector::FIXED]);
    assert_eq!(solver.restraints_for("N1"), vec![RestraintVector::PIN]);
}

#[test]
fn distributed_record_is_registered_verbatim() {
    let solver = record("Loaded\n10.0\n0.0P, 10.0P\nDIST-FY, -10, -10, 0.0, 10.0, Case=DEAD");

    let expected = DistributedLoadSpec {
        direction: "FY".to_string(),
        start_magnitude: -10.0,
        end_magnitude: -10.0,
        start_location: 0.0,
        end_location: 10.0,
        case: "DEAD".to_string(),
    };
    assert_eq!(
        solver.calls().last(),
        Some(&SolverCall::AddDistributedLoad {
            member: "Loaded".to_string(),
            load: expected,
        })
    );
}

#[test]
fn malformed_support_location_fails_before_registration() {
    let err = "Broken\n10.0\nabcP".parse::<BeamDescription>().unwrap_err();

    assert!(matches!(err, ModelError::MalformedNumericField { .. }));
    assert!(err.is_parse_error());
}

#[test]
fn unknown_restraint_code_is_rejected() {
    let err = "Broken\n10.0\n0.0P, 5.0Q".parse::<BeamDescription>().unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_RESTRAINT_CODE");
}

#[test]
fn minimal_beam_still_builds() {
    let solver = record("Bare\n10.0");

    assert_eq!(solver.node_count(), 2);
    assert_eq!(solver.restraints_for("N0"), vec![RestraintVector::PIN]);
    assert!(solver.restraints_for("N1").is_empty());
    // material, two nodes, one restraint, one member
    assert_eq!(solver.calls().len(), 5);
}

#[test]
fn non_positive_length_is_empty_topology() {
    let err = "Flat\n0.0".parse::<BeamDescription>().unwrap_err();
    assert_eq!(err.error_code(), "EMPTY_TOPOLOGY");
}

#[test]
fn building_twice_gives_the_same_calls() {
    let description = beam("Twice\n30.0\n0.0F, 20.0P, 10.0P, 30.0P\nPOINT-FY, -5, 15.0, Case=LIVE\nDIST-FY, -1, -2, 0.0, 30.0, Case=DEAD");
    let builder = BeamModelBuilder::new();

    let first: RecordingSolver = builder.build(&description).unwrap();
    let second: RecordingSolver = builder.build(&description).unwrap();

    assert_eq!(first.calls(), second.calls());
    assert_eq!(builder.plan(&description).unwrap(), builder.plan(&description).unwrap());
}

#[test]
fn node_layout_is_increasing_and_spans_the_beam() {
    let cases: [(f64, &[f64]); 4] = [
        (10.0, &[]),
        (10.0, &[0.0, 10.0]),
        (30.0, &[20.0, 10.0, 20.0, 0.0]),
        (12.5, &[2.5, 7.5, 5.0, 12.5, 7.5]),
    ];

    for (length, supports) in cases {
        let layout = node_layout(length, supports, NodeOrdering::Ascending).unwrap();
        let coords = layout.coordinates();

        let mut interior: Vec<f64> = supports.iter().copied().filter(|&x| x > 0.0 && x < length).collect();
        interior.sort_by(f64::total_cmp);
        interior.dedup();

        assert_eq!(coords.first(), Some(&0.0));
        assert_eq!(coords.last(), Some(&length));
        assert!(coords.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(layout.len(), 2 + interior.len());
    }
}

#[test]
fn declaration_ordering_keeps_support_order() {
    let layout = node_layout(30.0, &[20.0, 10.0, 20.0], NodeOrdering::Declaration).unwrap();
    assert_eq!(layout.coordinates(), vec![0.0, 20.0, 10.0, 30.0]);
}

#[test]
fn default_builder_numbers_interior_supports_in_input_order() {
    let solver = record("Three Span\n30.0\n0.0P, 20.0P, 10.0P, 30.0P");

    assert_eq!(
        nodes(&solver),
        vec![
            ("N0".to_string(), 0.0),
            ("N1".to_string(), 20.0),
            ("N2".to_string(), 10.0),
            ("N3".to_string(), 30.0)
        ]
    );

    let sorted = BuildOptions::default().with_node_ordering(NodeOrdering::Ascending);
    let plan = BeamModelBuilder::with_options(sorted)
        .plan(&beam("Three Span\n30.0\n0.0P, 20.0P, 10.0P, 30.0P"))
        .unwrap();
    let xs: Vec<f64> = plan.nodes.iter().map(|node| node.x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0]);
}

#[test]
fn rejected_registration_reports_its_stage() {
    let mut solver = FEModel::new();
    solver.add_material("Mat", Material::new(1.0, 1.0, 0.3, 1.0)).unwrap();

    let err = BeamModelBuilder::new()
        .build_into(&beam("Clash\n10.0"), solver)
        .unwrap_err();

    match err {
        ModelError::Solver { stage, .. } => assert_eq!(stage, "material registration"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn load_record_beyond_the_beam_is_rejected_by_the_solver() {
    let err = BeamModelBuilder::new()
        .build::<FEModel>(&beam("Short\n10.0\n0.0F, 10.0P\nPOINT-FY, -5, 12.0, Case=LIVE"))
        .unwrap_err();

    match err {
        ModelError::Solver { stage, .. } => assert_eq!(stage, "load application"),
        other => panic!("unexpected error: {:?}", other),
    }
}
