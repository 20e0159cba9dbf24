use governor::clock::{Clock, DefaultClock, QuantaInstant};
use governor::{DefaultDirectRateLimiter, DefaultKeyedRateLimiter, NotUntil, Quota, RateLimiter};
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Application limit: 100 requests every 2 minutes.
const APP_LIMIT_PER_2_MIN: u32 = 100;
/// Method limit applied to each resource separately.
const METHOD_LIMIT_PER_10_SECS: u32 = 500;

pub struct RateLimits {
    per_second: DefaultDirectRateLimiter,
    per_two_minutes: DefaultDirectRateLimiter,
    per_resource: DefaultKeyedRateLimiter<&'static str>,
    usage: Mutex<BTreeMap<&'static str, u32>>,
}

impl RateLimits {
    pub fn new(rate_per_second: u32) -> Self {
        RateLimits {
            per_second: RateLimiter::direct(Quota::per_second(nonzero(rate_per_second))),
            per_two_minutes: RateLimiter::direct(window(APP_LIMIT_PER_2_MIN, Duration::from_secs(120))),
            per_resource: RateLimiter::keyed(window(METHOD_LIMIT_PER_10_SECS, Duration::from_secs(10))),
            usage: Mutex::new(BTreeMap::new()),
        }
    }

    /// Blocks until the application and `resource` limits admit one request,
    /// then counts it.
    ///
    /// Limiters are passed one at a time; a denied check spends nothing, and
    /// each limiter is charged once it admits.
    pub fn wait(&self, resource: &'static str) {
        let clock = DefaultClock::default();

        admit(resource, &clock, || self.per_two_minutes.check());
        admit(resource, &clock, || self.per_resource.check_key(&resource));
        admit(resource, &clock, || self.per_second.check());

        self.record(resource);
    }

    /// Counts a request that is not subject to Riot limits.
    pub fn record(&self, resource: &'static str) {
        if let Ok(mut usage) = self.usage.lock() {
            *usage.entry(resource).or_insert(0) += 1;
        }
    }

    /// Requests made so far, per resource.
    pub fn usage(&self) -> BTreeMap<&'static str, u32> {
        self.usage.lock().map(|u| u.clone()).unwrap_or_default()
    }

    pub fn total(&self) -> u32 {
        self.usage().values().sum()
    }
}

fn admit(
    resource: &str,
    clock: &DefaultClock,
    check: impl Fn() -> Result<(), NotUntil<QuantaInstant>>,
) {
    while let Err(not_until) = check() {
        let wait = not_until.wait_time_from(clock.now());
        tracing::debug!("rate limited on {}, waiting {:?}", resource, wait);
        thread::sleep(wait);
    }
}

fn nonzero(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

fn window(limit: u32, period: Duration) -> Quota {
    let limit = nonzero(limit);
    Quota::with_period(period / limit.get())
        .unwrap_or_else(|| Quota::per_second(limit))
        .allow_burst(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_requests_per_resource() {
        let limits = RateLimits::new(50);

        limits.wait("summoner");
        limits.wait("summoner");
        limits.wait("league");

        let usage = limits.usage();
        assert_eq!(usage.get("summoner"), Some(&2));
        assert_eq!(usage.get("league"), Some(&1));
        assert_eq!(limits.total(), 3);
    }

    #[test]
    fn blocked_wait_charges_each_limiter_once() {
        let limits = RateLimits::new(50);
        assert!(matches!(limits.per_two_minutes.check_n(nonzero(100)), Ok(Ok(()))));

        // the app window refills one request every 1.2 s
        limits.wait("match");

        assert!(matches!(limits.per_second.check_n(nonzero(49)), Ok(Ok(()))));
        assert!(matches!(
            limits.per_resource.check_key_n(&"match", nonzero(499)),
            Ok(Ok(()))
        ));
        assert_eq!(limits.usage().get("match"), Some(&1));
    }

    #[test]
    fn zero_rate_falls_back_to_one() {
        assert_eq!(nonzero(0).get(), 1);
    }
}
