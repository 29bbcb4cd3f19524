use daybook_protocol::{Categorized, Entity, JournalResult, RankedEntity};
use daybook_score::combine_stat;
use tracing::{debug, warn};

use crate::merge::Merger;
use crate::rank::rank;

/// Exact name of the merged `other` entity the risk check looks at.
pub const RISK_KEYWORD: &str = "life";

/// The check fires when that entity's weight is strictly below this.
pub const RISK_THRESHOLD: f64 = -2.0;

/// Rolls many journal profiles up into one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossJournalSummarizer {
    merger: Merger,
}

impl CrossJournalSummarizer {
    pub fn new(merger: Merger) -> Self {
        Self { merger }
    }

    /// Re-merges and re-ranks lists already pooled across journals.
    pub fn summarize(&self, pooled: Categorized<Vec<Entity>>) -> Categorized<Vec<RankedEntity>> {
        pooled.map(|_, items| rank(self.merger.merge(&items)))
    }

    /// Top emotion effectors over a set of stored journal results.
    pub fn summarize_journals(&self, journals: &[JournalResult]) -> Categorized<Vec<RankedEntity>> {
        let pooled = pool(journals);
        debug!(journals = journals.len(), entities = pooled.total_len(), "pooled journals");
        self.summarize(pooled)
    }

    /// Narrow single-keyword heuristic: pools every journal's `other` list
    /// and checks the merged entity named [`RISK_KEYWORD`]. Missing means
    /// no flag.
    pub fn risk_flag(&self, journals: &[JournalResult]) -> bool {
        let other: Vec<Entity> = journals
            .iter()
            .flat_map(|journal| journal.entities.other.iter().map(RankedEntity::to_entity))
            .collect();
        self.risk_flag_pooled(&other)
    }

    pub fn risk_flag_pooled(&self, other: &[Entity]) -> bool {
        let merged = self.merger.merge(other);
        let Some(target) = merged.iter().find(|e| e.name == RISK_KEYWORD) else {
            return false;
        };

        let weight = combine_stat(&target.stat);
        let flagged = weight < RISK_THRESHOLD;
        if flagged {
            warn!(keyword = RISK_KEYWORD, weight, threshold = RISK_THRESHOLD, "risk heuristic raised");
        }
        flagged
    }
}

/// Concatenates each category across journals, without deduplication.
pub fn pool(journals: &[JournalResult]) -> Categorized<Vec<Entity>> {
    let mut pooled: Categorized<Vec<Entity>> = Categorized::default();
    for journal in journals {
        pooled.append(Categorized::from_fn(|category| {
            journal
                .entities
                .get(category)
                .iter()
                .map(RankedEntity::to_entity)
                .collect()
        }));
    }
    pooled
}
