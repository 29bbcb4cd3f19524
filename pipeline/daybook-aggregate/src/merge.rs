use std::collections::{HashMap, HashSet};

use daybook_protocol::{Entity, SentimentStat};
use petgraph::unionfind::UnionFind;

/// How a merged group's score is derived from its members.
/// Magnitude is always summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorePolicy {
    /// Sum of member scores divided by member count.
    #[default]
    Average,
    /// Plain sum of member scores (older profiles were produced this way).
    Sum,
}

/// Which entities end up in the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One greedy pass: a seed absorbs every later entity sharing a token
    /// with the seed's own name. The seed's token set never grows, so
    /// `"a b"`, `"b c"`, `"c d"` gives two groups, not one.
    #[default]
    SeedTokens,
    /// Connected components over token overlap. Opt-in only.
    Transitive,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Merger {
    pub policy: ScorePolicy,
    pub grouping: Grouping,
}

impl Merger {
    pub fn new(policy: ScorePolicy, grouping: Grouping) -> Self {
        Self { policy, grouping }
    }

    /// Collapses entities whose names share a token.
    ///
    /// Each group keeps the name of its first member. Groups come out in the
    /// order their first member appeared; nothing is sorted here.
    pub fn merge(&self, items: &[Entity]) -> Vec<Entity> {
        let groups = match self.grouping {
            Grouping::SeedTokens => seed_groups(items),
            Grouping::Transitive => transitive_groups(items),
        };

        groups
            .into_iter()
            .map(|members| self.fold(items, &members))
            .collect()
    }

    fn fold(&self, items: &[Entity], members: &[usize]) -> Entity {
        let mut score = 0.0;
        let mut magnitude = 0.0;
        for &idx in members {
            score += items[idx].stat.score;
            magnitude += items[idx].stat.magnitude;
        }

        if self.policy == ScorePolicy::Average {
            score /= members.len() as f64;
        }

        Entity {
            name: items[members[0]].name.clone(),
            stat: SentimentStat::new(score, magnitude),
        }
    }
}

/// `collapse_items` with the default policy and grouping.
pub fn collapse_items(items: &[Entity]) -> Vec<Entity> {
    Merger::default().merge(items)
}

fn seed_groups(items: &[Entity]) -> Vec<Vec<usize>> {
    let token_sets: Vec<HashSet<&str>> = items.iter().map(|e| e.tokens().collect()).collect();
    let mut consumed = vec![false; items.len()];
    let mut groups = Vec::new();

    for seed in 0..items.len() {
        if consumed[seed] {
            continue;
        }
        consumed[seed] = true;

        // Everything before the seed is already consumed.
        let mut members = vec![seed];
        for other in (seed + 1)..items.len() {
            if !consumed[other] && !token_sets[seed].is_disjoint(&token_sets[other]) {
                consumed[other] = true;
                members.push(other);
            }
        }
        groups.push(members);
    }

    groups
}

fn transitive_groups(items: &[Entity]) -> Vec<Vec<usize>> {
    let mut components = UnionFind::<usize>::new(items.len());
    let mut first_with_token: HashMap<&str, usize> = HashMap::new();

    for (idx, entity) in items.iter().enumerate() {
        for token in entity.tokens() {
            match first_with_token.get(token) {
                Some(&first) => {
                    components.union(first, idx);
                }
                None => {
                    first_with_token.insert(token, idx);
                }
            }
        }
    }

    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for idx in 0..items.len() {
        let root = components.find(idx);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(idx);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(entities: &[Entity]) -> Vec<&str> {
        entities.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_single_pass_is_not_transitive() {
        let items = vec![
            Entity::new("a b", 1.0, 1.0),
            Entity::new("b c", 1.0, 1.0),
            Entity::new("c d", 1.0, 1.0),
        ];

        let merged = collapse_items(&items);

        assert_eq!(names(&merged), vec!["a b", "c d"]);
        assert_eq!(merged[0].stat, SentimentStat::new(1.0, 2.0));
        assert_eq!(merged[1].stat, SentimentStat::new(1.0, 1.0));
    }

    #[test]
    fn test_transitive_grouping_closes_chains() {
        let items = vec![
            Entity::new("a b", 0.5, 1.0),
            Entity::new("b c", 0.0, 1.0),
            Entity::new("c d", -0.2, 1.0),
            Entity::new("e", 0.3, 2.0),
        ];

        let merged = Merger::new(ScorePolicy::Average, Grouping::Transitive).merge(&items);

        assert_eq!(names(&merged), vec!["a b", "e"]);
        assert!((merged[0].stat.score - 0.1).abs() < 1e-12);
        assert_eq!(merged[0].stat.magnitude, 3.0);
    }

    #[test]
    fn test_score_policies() {
        let items = vec![
            Entity::new("my job", -0.6, 1.0),
            Entity::new("job", -0.2, 0.5),
            Entity::new("new job", 0.2, 0.5),
        ];

        let average = Merger::new(ScorePolicy::Average, Grouping::SeedTokens).merge(&items);
        let sum = Merger::new(ScorePolicy::Sum, Grouping::SeedTokens).merge(&items);

        assert_eq!(average.len(), 1);
        assert!((average[0].stat.score - (-0.2)).abs() < 1e-12);
        assert!((sum[0].stat.score - (-0.6)).abs() < 1e-12);
        assert_eq!(average[0].stat.magnitude, 2.0);
        assert_eq!(sum[0].stat.magnitude, 2.0);
    }

    #[test]
    fn test_first_seen_order_and_name() {
        let items = vec![
            Entity::new("dog", 0.1, 0.1),
            Entity::new("work", -0.5, 1.0),
            Entity::new("the dog", 0.9, 0.9),
            Entity::new("work stress", -0.9, 2.0),
        ];

        let merged = collapse_items(&items);
        assert_eq!(names(&merged), vec!["dog", "work"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(collapse_items(&[]).is_empty());
        assert!(Merger::new(ScorePolicy::Sum, Grouping::Transitive)
            .merge(&[])
            .is_empty());
    }

    fn entity_strategy() -> impl Strategy<Value = Entity> {
        (
            prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e", "f"]), 1..4),
            -1.0f64..=1.0,
            0.0f64..5.0,
        )
            .prop_map(|(tokens, score, magnitude)| Entity::new(tokens.join(" "), score, magnitude))
    }

    proptest! {
        #[test]
        fn test_merge_is_idempotent(items in prop::collection::vec(entity_strategy(), 0..12)) {
            let once = collapse_items(&items);
            let twice = collapse_items(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn test_seed_names_share_no_token(items in prop::collection::vec(entity_strategy(), 0..12)) {
            let merged = collapse_items(&items);
            for (i, left) in merged.iter().enumerate() {
                let left_tokens: HashSet<&str> = left.tokens().collect();
                for right in &merged[i + 1..] {
                    prop_assert!(right.tokens().all(|t| !left_tokens.contains(t)));
                }
            }
        }

        #[test]
        fn test_magnitude_is_conserved(items in prop::collection::vec(entity_strategy(), 0..12)) {
            let before: f64 = items.iter().map(|e| e.stat.magnitude).sum();
            let after: f64 = collapse_items(&items).iter().map(|e| e.stat.magnitude).sum();
            prop_assert!((before - after).abs() < 1e-9);
        }
    }
}
