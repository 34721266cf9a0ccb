use dns_edge_domain::{CacheDecision, EndpointKind};

/// Fixed one-hour lifetime for the server-list and type-list endpoints.
pub const STATIC_DIRECTIVE: &str = "public, max-age=3600";

/// Cache Policy Engine. Pure: never touches the store or the network.
///
/// For dynamic endpoints `consult_cache` stays true even when the directive
/// is `no-cache`: the read path always checks the store first unless the
/// caller explicitly asked for a bypass, while the directive only governs
/// whether a fresh response is worth writing.
pub fn decide(
    kind: EndpointKind,
    bypass_requested: bool,
    min_ttl: Option<i64>,
) -> CacheDecision {
    match kind {
        EndpointKind::Static => CacheDecision {
            consult_cache: true,
            cache_control: STATIC_DIRECTIVE.to_string(),
        },
        EndpointKind::Dynamic => {
            if bypass_requested {
                return CacheDecision {
                    consult_cache: false,
                    cache_control: "no-cache".to_string(),
                };
            }
            match min_ttl {
                Some(ttl) if ttl > 0 => CacheDecision {
                    consult_cache: true,
                    cache_control: format!("public, max-age={ttl}"),
                },
                _ => CacheDecision {
                    consult_cache: true,
                    cache_control: "no-cache".to_string(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_bypass_wins_over_any_ttl() {
        for ttl in [None, Some(0), Some(45), Some(86_400)] {
            let decision = decide(EndpointKind::Dynamic, true, ttl);
            assert!(!decision.consult_cache);
            assert_eq!(decision.cache_control, "no-cache");
        }
    }

    #[test]
    fn test_dynamic_positive_ttl_advertises_max_age() {
        let decision = decide(EndpointKind::Dynamic, false, Some(45));
        assert!(decision.consult_cache);
        assert_eq!(decision.cache_control, "public, max-age=45");
    }

    #[test]
    fn test_dynamic_missing_ttl_is_no_cache_but_still_consults() {
        let decision = decide(EndpointKind::Dynamic, false, None);
        assert!(decision.consult_cache);
        assert_eq!(decision.cache_control, "no-cache");
    }

    #[test]
    fn test_dynamic_zero_ttl_is_no_cache_but_still_consults() {
        let decision = decide(EndpointKind::Dynamic, false, Some(0));
        assert!(decision.consult_cache);
        assert_eq!(decision.cache_control, "no-cache");
    }

    #[test]
    fn test_static_is_fixed_one_hour() {
        for bypass in [false, true] {
            for ttl in [None, Some(5)] {
                let decision = decide(EndpointKind::Static, bypass, ttl);
                assert!(decision.consult_cache);
                assert_eq!(decision.cache_control, "public, max-age=3600");
            }
        }
    }
}
