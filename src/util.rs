//! Small generic helpers.

/// Restrict `value` to the range `min..=max`.
///
/// Unlike [`Ord::clamp`], this accepts floats. `min` should not exceed `max`;
/// if it does, `min` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Evaluate to `if_true` when `condition` holds, and `if_false` otherwise.
pub fn ternary<T>(condition: bool, if_true: T, if_false: T) -> T {
    if condition { if_true } else { if_false }
}

/// The value behind `value`, or `default` if there is none.
pub fn default<T: Clone>(value: Option<&T>, default: T) -> T {
    value.cloned().unwrap_or(default)
}

/// `first`, unless it is the default value of its type, in which case
/// `second`.
pub fn or<T: Default + PartialEq>(first: T, second: T) -> T {
    if first == T::default() { second } else { first }
}

/// `first` if it is the default value of its type, otherwise `second`.
pub fn and<T: Default + PartialEq>(first: T, second: T) -> T {
    if first == T::default() { first } else { second }
}
