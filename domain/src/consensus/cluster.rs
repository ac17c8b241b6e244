//! Greedy single-link clustering of responder answers

use super::outcome::ResponderSuccess;
use super::similarity::are_similar;
use crate::core::provider::Provider;

/// A non-empty group of answers judged to say the same thing
///
/// The first member is the representative: every later member was admitted
/// because it is similar to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCluster<'a> {
    members: Vec<&'a ResponderSuccess>,
}

impl<'a> ResultCluster<'a> {
    fn singleton(first: &'a ResponderSuccess) -> Self {
        Self {
            members: vec![first],
        }
    }

    pub fn representative(&self) -> &'a ResponderSuccess {
        self.members[0]
    }

    pub fn members(&self) -> &[&'a ResponderSuccess] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; clusters are created with one member
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mean confidence of the members
    pub fn combined_confidence(&self) -> f64 {
        let sum: f64 = self.members.iter().map(|m| m.confidence).sum();
        sum / self.members.len() as f64
    }

    pub fn providers(&self) -> impl Iterator<Item = &'a Provider> + '_ {
        self.members.iter().map(|m| &m.provider)
    }
}

/// Group answers in arrival order.
///
/// Each answer joins the first cluster whose representative it is similar
/// to, or opens a new cluster. Cluster order is formation order.
pub fn cluster_successes<'a>(successes: &[&'a ResponderSuccess]) -> Vec<ResultCluster<'a>> {
    let mut clusters: Vec<ResultCluster<'a>> = Vec::new();

    for &success in successes {
        match clusters
            .iter_mut()
            .find(|c| are_similar(&success.text, &c.representative().text))
        {
            Some(cluster) => cluster.members.push(success),
            None => clusters.push(ResultCluster::singleton(success)),
        }
    }

    clusters
}
