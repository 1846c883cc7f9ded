use std::collections::HashMap;

/// One class's predicted probability, as reported by a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Label -> probability mapping produced by one classifier invocation.
/// Scores are not assumed to sum to 1.
pub type Distribution = HashMap<String, f32>;

/// The k highest-scoring entries of `prob`, descending by score.
///
/// `k` must not exceed the number of labels in `prob`; a violation is a
/// programmer error and panics. `k == 0` returns an empty list. Relative
/// order among equal scores is unspecified.
pub fn top_k(prob: &Distribution, k: usize) -> Vec<LabelScore> {
    assert!(
        k <= prob.len(),
        "top_k: requested {} of {} labels",
        k,
        prob.len()
    );

    let mut ranked: Vec<LabelScore> = prob
        .iter()
        .map(|(label, score)| LabelScore {
            label: label.clone(),
            score: *score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod ranking_test {
    use super::{top_k, Distribution, LabelScore};

    fn distribution(entries: &[(&str, f32)]) -> Distribution {
        entries
            .iter()
            .map(|(label, score)| (label.to_string(), *score))
            .collect()
    }

    #[test]
    fn test_returns_exactly_k_entries() {
        let prob = distribution(&[("cat", 0.7), ("dog", 0.2), ("bird", 0.1)]);

        for k in 0..=prob.len() {
            assert_eq!(top_k(&prob, k).len(), k);
        }
    }

    #[test]
    fn test_sorted_descending() {
        let prob = distribution(&[
            ("cat", 0.05),
            ("dog", 0.3),
            ("bird", 0.25),
            ("car", 0.4),
            ("tree", 0.0),
        ]);

        let ranked = top_k(&prob, prob.len());

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_top_two_of_three() {
        let prob = distribution(&[("cat", 0.7), ("dog", 0.2), ("bird", 0.1)]);

        let ranked = top_k(&prob, 2);

        assert_eq!(
            ranked,
            vec![
                LabelScore {
                    label: "cat".to_string(),
                    score: 0.7,
                },
                LabelScore {
                    label: "dog".to_string(),
                    score: 0.2,
                },
            ]
        );
    }

    #[test]
    fn test_k_zero_is_empty() {
        let prob = distribution(&[("cat", 0.7), ("dog", 0.2)]);

        assert!(top_k(&prob, 0).is_empty());
        assert!(top_k(&Distribution::new(), 0).is_empty());
    }

    #[test]
    fn test_full_k_reorders_without_dropping_labels() {
        let prob = distribution(&[("cat", 0.1), ("dog", 0.6), ("bird", 0.3)]);

        let ranked = top_k(&prob, prob.len());

        let mut labels: Vec<&str> = ranked.iter().map(|entry| entry.label.as_str()).collect();
        labels.sort();
        assert_eq!(labels, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_tie_yields_either_label() {
        let prob = distribution(&[("a", 0.5), ("b", 0.5)]);

        let ranked = top_k(&prob, 1);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.5);
        assert!(ranked[0].label == "a" || ranked[0].label == "b");
    }

    #[test]
    fn test_repeated_calls_agree() {
        let prob = distribution(&[("cat", 0.7), ("dog", 0.2), ("bird", 0.1)]);

        let first = top_k(&prob, 3);
        let second = top_k(&prob, 3);

        assert_eq!(first, second);
    }

    #[test]
    #[should_panic]
    fn test_k_beyond_empty_distribution_panics() {
        top_k(&Distribution::new(), 1);
    }

    #[test]
    #[should_panic]
    fn test_k_beyond_distribution_size_panics() {
        let prob = distribution(&[("cat", 0.7), ("dog", 0.2)]);

        top_k(&prob, 3);
    }
}
