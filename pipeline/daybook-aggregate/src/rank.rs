use daybook_protocol::{Entity, RankedEntity};
use daybook_score::combine_stat;

/// Scores each entity and orders the list by descending weight.
/// Ties keep their incoming order.
pub fn rank(entities: Vec<Entity>) -> Vec<RankedEntity> {
    let mut ranked: Vec<RankedEntity> = entities
        .into_iter()
        .map(|entity| RankedEntity {
            weight: combine_stat(&entity.stat),
            name: entity.name,
            stat: entity.stat,
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_weight() {
        let ranked = rank(vec![
            Entity::new("rain", -0.6, 1.0),
            Entity::new("beach", 0.9, 2.0),
            Entity::new("lunch", 0.3, 0.5),
        ]);

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["beach", "lunch", "rain"]);
        assert!(ranked.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn test_magnitude_outweighs_small_polarity_gaps() {
        // Both scores saturate the curve; the stronger feeling wins.
        let ranked = rank(vec![
            Entity::new("promotion", 0.95, 1.0),
            Entity::new("holiday", 0.6, 4.0),
        ]);

        assert_eq!(ranked[0].name, "holiday");
    }
}
