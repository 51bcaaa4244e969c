//! Algebraic laws of the combinator layer, checked over representative
//! success and error inputs.

use outcome_rail::diagnostic::NoCapture;
use outcome_rail::{ErrorKind, Outcome};

fn inputs() -> Vec<Outcome<i32>> {
    vec![
        Outcome::success(0),
        Outcome::success(41),
        Outcome::error_with_capture("boom", ErrorKind::Unexpected, &NoCapture),
        Outcome::error_with_capture("denied", ErrorKind::Unauthorized, &NoCapture),
        Outcome::not_found("row"),
    ]
}

#[test]
fn test_map_identity() {
    for r in inputs() {
        assert_eq!(r.clone().map(|x| x), r);
    }
}

#[test]
fn test_map_identity_under_serialization() {
    let r = Outcome::success(9);
    assert_eq!(r.clone().map(|x| x).serialize(), r.serialize());
}

#[test]
fn test_map_composition() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;
    for r in inputs() {
        assert_eq!(r.clone().map(f).map(g), r.map(|x| g(f(x))));
    }
}

#[test]
fn test_flat_map_left_identity() {
    let f = |x: i32| {
        if x > 0 {
            Outcome::success(x * 2)
        } else {
            Outcome::user_validation_error("non-positive", None)
        }
    };
    for x in [0, 1, 41] {
        assert_eq!(Outcome::success(x).flat_map(f), f(x));
    }
}

#[test]
fn test_flat_map_right_identity() {
    for r in inputs() {
        assert_eq!(r.clone().flat_map(Outcome::success), r);
    }
}

#[test]
fn test_flat_map_associativity() {
    let f = |x: i32| Outcome::success(x + 1);
    let g = |x: i32| {
        if x % 2 == 0 {
            Outcome::success(x / 2)
        } else {
            Outcome::<i32>::not_found("half")
        }
    };
    for r in inputs() {
        assert_eq!(
            r.clone().flat_map(f).flat_map(g),
            r.flat_map(|x| f(x).flat_map(g))
        );
    }
}

#[test]
fn test_error_short_circuit_preserves_every_field() {
    let errors = vec![
        Outcome::<i32>::error_with_capture("boom", ErrorKind::Unexpected, &NoCapture),
        Outcome::<i32>::unauthorized(),
        Outcome::<i32>::not_found("row"),
        Outcome::<i32>::error_with_cause("write failed", "disk full"),
    ];
    for r in errors {
        let original = r.error_ref().cloned().expect("error variant");
        let mapped = r.clone().map(|x| x + 1);
        let chained = r.flat_map(|x| Outcome::success(x + 1));
        assert_eq!(mapped.error_ref(), Some(&original));
        assert_eq!(chained.error_ref(), Some(&original));
    }
}

#[test]
fn test_round_trip_observationally_equivalent_under_fold() {
    for r in inputs() {
        let round = Outcome::from_wire(r.serialize());
        let observe = |o: Outcome<i32>| o.fold(|x| format!("ok:{x}"), |e| format!("err:{}:{}", e.kind, e.message));
        assert_eq!(observe(round), observe(r));
    }
}
