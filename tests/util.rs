use sprocket::util::{and, clamp, default, or, ternary};

#[test]
fn clamp_values() {
    assert_eq!(clamp(5, 0, 10), 5);
    assert_eq!(clamp(-3, 0, 10), 0);
    assert_eq!(clamp(12, 0, 10), 10);
    assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
}

#[test]
fn ternary_values() {
    assert_eq!(ternary(true, "yes", "no"), "yes");
    assert_eq!(ternary(false, "yes", "no"), "no");
}

#[test]
fn default_values() {
    let value = 4;
    assert_eq!(default(Some(&value), 9), 4);
    assert_eq!(default(None, 9), 9);
}

#[test]
fn or_values() {
    assert_eq!(or(0, 3), 3);
    assert_eq!(or(2, 3), 2);
    assert_eq!(or("", "fallback"), "fallback");
}

#[test]
fn and_values() {
    assert_eq!(and(0, 3), 0);
    assert_eq!(and(2, 3), 3);
    assert_eq!(and(String::new(), "next".to_string()), "");
}
