//! Picks a bounded, capability-qualified subset of responders for a task.

use crate::core::error::SwarmError;
use crate::responder::{ResponderProfile, TaskDefinition};

/// Responder selection
///
/// Eligible responders are ranked cheapest-and-fastest first and about half
/// of them (rounded up) are taken, bounded by `min` and `max`. Sampling half
/// the pool keeps enough diversity for the aggregator to compare answers.
pub struct ResponderSelector;

impl ResponderSelector {
    /// Select responders for `definition` from `profiles`.
    ///
    /// `profiles` must be in registration order; equal scores keep that order.
    ///
    /// # Example
    ///
    /// ```
    /// use swarm_domain::{ResponderRegistry, ResponderSelector};
    ///
    /// let registry = ResponderRegistry::with_defaults();
    /// let def = registry.find_task("text_generation").unwrap();
    /// let selected = ResponderSelector::select(def, registry.profiles(), 1, 5).unwrap();
    ///
    /// // Two eligible, half rounded up is one: the cheaper/faster OpenAI profile
    /// assert_eq!(selected.len(), 1);
    /// assert_eq!(selected[0].provider.as_str(), "openai");
    /// ```
    pub fn select<'a, I>(
        definition: &TaskDefinition,
        profiles: I,
        min: usize,
        max: usize,
    ) -> Result<Vec<ResponderProfile>, SwarmError>
    where
        I: IntoIterator<Item = &'a ResponderProfile>,
    {
        let mut eligible: Vec<&ResponderProfile> = profiles
            .into_iter()
            .filter(|p| definition.accepts(p))
            .collect();

        if eligible.len() < min {
            return Err(SwarmError::InsufficientResponders {
                task: definition.name.clone(),
                eligible: eligible.len(),
                required: min,
            });
        }

        // sort_by is stable: ties keep registration order
        eligible.sort_by(|a, b| a.selection_score().total_cmp(&b.selection_score()));

        let count = Self::selection_size(eligible.len(), min, max);
        Ok(eligible.into_iter().take(count).cloned().collect())
    }

    /// `min(max(ceil(eligible / 2), min), max)`
    pub fn selection_size(eligible: usize, min: usize, max: usize) -> usize {
        eligible.div_ceil(2).max(min).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::provider::Provider;
    use crate::responder::ResponderClass;

    fn profile(name: &str, cost: f64, latency_ms: u64) -> ResponderProfile {
        ResponderProfile::new(Provider::from(name), ResponderClass::Large)
            .with_capabilities(["reasoning"])
            .with_cost_per_unit(cost)
            .with_average_latency_ms(latency_ms)
    }

    fn definition() -> TaskDefinition {
        TaskDefinition::new("reasoning", ResponderClass::Large)
            .with_required_capabilities(["reasoning"])
    }

    fn names(selected: &[ResponderProfile]) -> Vec<String> {
        selected.iter().map(|p| p.provider.to_string()).collect()
    }

    #[test]
    fn test_pool_of_four_selects_two() {
        let pool: Vec<_> = (0..4).map(|i| profile(&format!("p{i}"), 0.0, 1000)).collect();
        let selected = ResponderSelector::select(&definition(), &pool, 2, 5).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_cheaper_and_faster_first() {
        let pool = vec![
            profile("slow", 0.001, 3000),
            profile("pricey", 2.0, 100),
            profile("fast", 0.001, 200),
            profile("mid", 0.01, 900),
        ];
        let selected = ResponderSelector::select(&definition(), &pool, 1, 5).unwrap();
        assert_eq!(names(&selected), vec!["fast", "mid"]);
    }

    #[test]
    fn test_ties_keep_registration_order() {
        let pool = vec![
            profile("first", 0.0, 500),
            profile("second", 0.0, 500),
            profile("third", 0.0, 500),
        ];
        let selected = ResponderSelector::select(&definition(), &pool, 1, 5).unwrap();
        assert_eq!(names(&selected), vec!["first", "second"]);
    }

    #[test]
    fn test_insufficient_responders() {
        let pool = vec![
            profile("only", 0.0, 500),
            ResponderProfile::new(Provider::from("small"), ResponderClass::Small)
                .with_capabilities(["reasoning"]),
        ];
        let err = ResponderSelector::select(&definition(), &pool, 2, 5).unwrap_err();
        assert_eq!(
            err,
            SwarmError::InsufficientResponders {
                task: "reasoning".to_string(),
                eligible: 1,
                required: 2,
            }
        );
    }

    #[test]
    fn test_min_raises_selection() {
        let pool: Vec<_> = (0..4).map(|i| profile(&format!("p{i}"), 0.0, 1000)).collect();
        let selected = ResponderSelector::select(&definition(), &pool, 3, 5).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_max_caps_selection() {
        let pool: Vec<_> = (0..20).map(|i| profile(&format!("p{i}"), 0.0, 1000)).collect();
        let selected = ResponderSelector::select(&definition(), &pool, 2, 5).unwrap();
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_selection_size_bounds_hold() {
        for min in 1..=4 {
            for max in min..=6 {
                for eligible in min..=12 {
                    let n = ResponderSelector::selection_size(eligible, min, max);
                    assert!(n >= min && n <= max, "eligible={eligible} min={min} max={max}");
                    assert!(n <= eligible);
                }
            }
        }
    }

    #[test]
    fn test_selection_size_examples() {
        assert_eq!(ResponderSelector::selection_size(4, 2, 5), 2);
        assert_eq!(ResponderSelector::selection_size(5, 1, 5), 3);
        assert_eq!(ResponderSelector::selection_size(1, 1, 5), 1);
    }
}
