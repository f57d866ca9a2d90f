use super::*;
use std::thread;

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));
    assert!(!tc.is_expired());

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(tc.is_expired());
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
    assert_eq!(tc.time_left(), Duration::ZERO);
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.is_expired());
    assert_eq!(tc.remaining(), None);
    assert_eq!(tc.time_left(), Duration::MAX);
}

#[test]
fn test_closure_is_a_clock() {
    let clock = || Duration::from_millis(150);
    assert_eq!(clock.time_left(), Duration::from_millis(150));

    let dyn_clock: &dyn Clock = &clock;
    assert_eq!(dyn_clock.time_left(), Duration::from_millis(150));
}
