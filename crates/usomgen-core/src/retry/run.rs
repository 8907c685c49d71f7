//! Retry loop: run a closure until success or the attempt budget is spent.

use super::classify;
use super::error::{FetchError, RetryError};
use super::policy::{RetryDecision, RetryPolicy};
use std::time::Duration;

/// Suspends the caller between attempts. Swapped out in tests so the
/// backoff schedule can be observed without real time passing.
pub trait Sleeper {
    fn sleep(&self, delay: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Runs `f` until it succeeds or the policy says to stop.
///
/// `f` receives the zero-based attempt index. On failure the error is
/// classified and logged, then the sleeper waits out the backoff delay.
pub fn run_with_retry<T, S, F>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut f: F,
) -> Result<T, RetryError>
where
    S: Sleeper + ?Sized,
    F: FnMut(u32) -> Result<T, FetchError>,
{
    let mut attempt = 0u32;
    loop {
        match f(attempt) {
            Ok(value) => return Ok(value),
            Err(e) => {
                let kind = classify::classify(&e);
                tracing::warn!(
                    attempt = attempt + 1,
                    max = policy.max_attempts,
                    ?kind,
                    "attempt failed: {}",
                    e
                );
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        return Err(RetryError {
                            attempts: attempt + 1,
                            last: e,
                        })
                    }
                    RetryDecision::RetryAfter(d) => {
                        tracing::info!("waiting {:.1}s before next attempt", d.as_secs_f64());
                        sleeper.sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingSleeper {
        delays: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        fn sleep(&self, delay: Duration) {
            self.delays.borrow_mut().push(delay);
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(10),
        }
    }

    #[test]
    fn first_success_needs_no_sleep() {
        let sleeper = RecordingSleeper::default();
        let out = run_with_retry(&policy(8), &sleeper, |_| Ok::<_, FetchError>(7)).unwrap();
        assert_eq!(out, 7);
        assert!(sleeper.delays.borrow().is_empty());
    }

    #[test]
    fn three_failures_then_success_backs_off_exponentially() {
        let sleeper = RecordingSleeper::default();
        let out = run_with_retry(&policy(8), &sleeper, |attempt| {
            if attempt < 3 {
                Err(FetchError::Http(500))
            } else {
                Ok("body")
            }
        })
        .unwrap();
        assert_eq!(out, "body");
        assert_eq!(
            *sleeper.delays.borrow(),
            vec![
                Duration::from_millis(10),
                Duration::from_millis(20),
                Duration::from_millis(40)
            ]
        );
    }

    #[test]
    fn always_failing_stops_after_exactly_max_attempts() {
        let sleeper = RecordingSleeper::default();
        let calls = Cell::new(0u32);
        let err = run_with_retry(&policy(8), &sleeper, |_| {
            calls.set(calls.get() + 1);
            Err::<(), _>(FetchError::EmptyBody)
        })
        .unwrap_err();
        assert_eq!(calls.get(), 8);
        assert_eq!(err.attempts, 8);
        assert!(matches!(err.last, FetchError::EmptyBody));
        // No sleep after the final attempt.
        assert_eq!(sleeper.delays.borrow().len(), 7);
    }

    #[test]
    fn single_attempt_policy_never_sleeps() {
        let sleeper = RecordingSleeper::default();
        let err =
            run_with_retry(&policy(1), &sleeper, |_| Err::<(), _>(FetchError::Http(404)))
                .unwrap_err();
        assert_eq!(err.attempts, 1);
        assert!(sleeper.delays.borrow().is_empty());
    }
}
