use doh_relay_application::RateLimiterService;
use doh_relay_domain::config::RateLimitConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

const CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100));
const OTHER: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 101));

#[test]
fn test_admits_up_to_max_then_rejects() {
    let limiter = RateLimiterService::new(10, Duration::from_secs(60));
    let now = Instant::now();

    for _ in 0..10 {
        assert!(limiter.admit_at(CLIENT, now));
    }
    assert!(!limiter.admit_at(CLIENT, now));
}

#[test]
fn test_window_slides() {
    let limiter = RateLimiterService::new(10, Duration::from_secs(60));
    let start = Instant::now();

    for i in 0..10 {
        assert!(limiter.admit_at(CLIENT, start + Duration::from_secs(i)));
    }
    assert!(!limiter.admit_at(CLIENT, start + Duration::from_secs(30)));

    // First admission has aged out; one slot frees up.
    assert!(limiter.admit_at(CLIENT, start + Duration::from_secs(61)));
    assert!(!limiter.admit_at(CLIENT, start + Duration::from_secs(61)));
}

#[test]
fn test_fresh_window_after_idle_period() {
    let limiter = RateLimiterService::new(2, Duration::from_secs(60));
    let start = Instant::now();

    assert!(limiter.admit_at(CLIENT, start));
    assert!(limiter.admit_at(CLIENT, start));
    assert!(!limiter.admit_at(CLIENT, start));

    let later = start + Duration::from_secs(120);
    assert!(limiter.admit_at(CLIENT, later));
}

#[test]
fn test_clients_are_tracked_independently() {
    let limiter = RateLimiterService::new(1, Duration::from_secs(60));
    let now = Instant::now();

    assert!(limiter.admit_at(CLIENT, now));
    assert!(!limiter.admit_at(CLIENT, now));
    assert!(limiter.admit_at(OTHER, now));

    assert_eq!(limiter.tracked_clients(), 2);
}

#[test]
fn test_single_request_limit() {
    // Concrete scenario: MAX_REQUESTS=1, two rapid requests.
    let limiter = RateLimiterService::new(1, Duration::from_secs(60));
    let now = Instant::now();

    assert!(limiter.admit_at(CLIENT, now));
    assert!(!limiter.admit_at(CLIENT, now + Duration::from_millis(5)));
}

#[test]
fn test_sweep_evicts_idle_clients_only() {
    let limiter = RateLimiterService::new(10, Duration::from_secs(60));
    let start = Instant::now();

    limiter.admit_at(CLIENT, start);
    limiter.admit_at(OTHER, start + Duration::from_secs(50));
    assert_eq!(limiter.tracked_clients(), 2);

    let evicted = limiter.sweep_idle_at(start + Duration::from_secs(70));
    assert_eq!(evicted, 1);
    assert_eq!(limiter.tracked_clients(), 1);

    let evicted = limiter.sweep_idle_at(start + Duration::from_secs(200));
    assert_eq!(evicted, 1);
    assert_eq!(limiter.tracked_clients(), 0);
}

#[test]
fn test_from_config() {
    let config = RateLimitConfig::default();
    let limiter = RateLimiterService::from_config(&config);
    let now = Instant::now();

    for _ in 0..10 {
        assert!(limiter.admit_at(CLIENT, now));
    }
    assert!(!limiter.admit_at(CLIENT, now));
}
