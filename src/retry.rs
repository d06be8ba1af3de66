//! Bounded retry loops.
//!
//! Attempts are numbered from 1. Every combinator makes at least one attempt,
//! even when asked for zero.

#[cfg(feature = "std")]
use std::{thread, time::Duration};

use core::fmt::Display;

use log::debug;

/// Run `f` until it succeeds, at most `attempts` times.
///
/// Returns the first success, or the error of the final attempt.
pub fn retry<T, E: Display>(
    attempts: u32,
    f: impl FnMut(u32) -> Result<T, E>,
) -> Result<T, E> {
    retry_with(attempts, f, |_, _| Ok(()))
}

/// Run `f` until it succeeds, at most `attempts` times, calling `on_err`
/// after each failure.
///
/// If `on_err` returns an error, retrying stops and that error is returned.
/// Otherwise, returns the first success, or the error of the final attempt.
pub fn retry_with<T, E: Display>(
    attempts: u32,
    mut f: impl FnMut(u32) -> Result<T, E>,
    mut on_err: impl FnMut(u32, &E) -> Result<(), E>,
) -> Result<T, E> {
    let attempts = attempts.max(1);
    let mut attempt = 1;

    loop {
        let err = match f(attempt) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        debug!("Attempt {attempt} of {attempts} failed: {err}");

        on_err(attempt, &err)?;

        if attempt == attempts {
            return Err(err);
        }

        attempt += 1;
    }
}

/// Run `f` until it succeeds, at most `attempts` times, sleeping between
/// attempts. The first sleep lasts `delay`, and each later one twice as long
/// as the one before.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn retry_with_backoff<T, E: Display>(
    attempts: u32,
    delay: Duration,
    f: impl FnMut(u32) -> Result<T, E>,
) -> Result<T, E> {
    let attempts = attempts.max(1);
    let mut delay = delay;

    retry_with(attempts, f, |attempt, _| {
        if attempt < attempts {
            thread::sleep(delay);
            delay = delay.saturating_mul(2);
        }
        Ok(())
    })
}
