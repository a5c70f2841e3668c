use super::*;

#[test]
fn bounds_reject_negative_and_non_finite() {
    assert!(Bounds::new(300.0, 150.0).is_ok());
    assert!(Bounds::new(0.0, 0.0).is_ok());
    assert!(Bounds::new(-1.0, 10.0).unwrap_err().is_integration());
    assert!(Bounds::new(10.0, f64::NAN).unwrap_err().is_integration());
    assert!(Bounds::new(f64::INFINITY, 10.0).is_err());
}

#[test]
fn handle_seq_is_monotonic_and_non_zero() {
    let mut seq = HandleSeq::default();
    let a = seq.next_raw();
    let b = seq.next_raw();
    assert_eq!(a, 1);
    assert!(b > a);
}
