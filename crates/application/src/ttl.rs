use dns_edge_domain::ServerAnswer;

/// Minimum TTL across all answers that carry a numeric TTL.
///
/// Returns `None` for an empty answer set or when no answer has a usable
/// TTL, meaning "do not advertise a max-age". Answers whose TTL did not
/// deserialize as a number are skipped, never counted as zero.
pub fn shortest_ttl(answers: &[ServerAnswer]) -> Option<i64> {
    answers.iter().filter_map(|a| a.ttl).min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(ttl: Option<i64>) -> ServerAnswer {
        ServerAnswer {
            server: "Cloudflare (1.1.1.1:53)".to_string(),
            values: vec!["93.184.215.14".to_string()],
            server_address: "1.1.1.1:53".to_string(),
            ttl,
            duration: 1_200_000,
            duration_string: "1.2ms".to_string(),
        }
    }

    #[test]
    fn test_empty_answers_yield_none() {
        assert_eq!(shortest_ttl(&[]), None);
    }

    #[test]
    fn test_returns_true_minimum() {
        let answers = [answer(Some(300)), answer(Some(60)), answer(Some(120))];
        assert_eq!(shortest_ttl(&answers), Some(60));
    }

    #[test]
    fn test_ignores_unusable_ttls() {
        let answers = [
            answer(Some(300)),
            answer(None),
            answer(Some(60)),
            answer(Some(120)),
        ];
        assert_eq!(shortest_ttl(&answers), Some(60));
    }

    #[test]
    fn test_all_unusable_yields_none() {
        let answers = [answer(None), answer(None)];
        assert_eq!(shortest_ttl(&answers), None);
    }

    #[test]
    fn test_zero_and_negative_are_still_minimums() {
        // Policy decides what to do with non-positive TTLs; extraction
        // just reports them.
        assert_eq!(shortest_ttl(&[answer(Some(0)), answer(Some(5))]), Some(0));
        assert_eq!(shortest_ttl(&[answer(Some(-1)), answer(Some(5))]), Some(-1));
    }
}
