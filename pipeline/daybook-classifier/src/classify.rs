use std::sync::Arc;

use daybook_protocol::{AnnotatedEntity, Categorized, Category, Entity, EntityType, RoleFlags};
use tracing::debug;

use crate::labels::{mention_words, DependencyLabelMap};
use crate::stopwords::Stopwords;

/// Category an entity type routes to. Everything that is not an event,
/// person or location is only a candidate for `other` and still has to pass
/// the dependency gate.
pub fn route(kind: EntityType) -> Category {
    match kind {
        EntityType::Event => Category::Events,
        EntityType::Person => Category::People,
        EntityType::Location => Category::Locations,
        _ => Category::Other,
    }
}

/// Buckets backend entities into categories, dropping stopwords and
/// `other` candidates that never appear in an allowed syntactic role.
#[derive(Debug, Clone)]
pub struct EntityClassifier {
    stopwords: Arc<Stopwords>,
    allowed_roles: RoleFlags,
}

impl EntityClassifier {
    pub fn new(stopwords: Arc<Stopwords>) -> Self {
        Self {
            stopwords,
            allowed_roles: RoleFlags::default(),
        }
    }

    pub fn with_roles(mut self, allowed_roles: RoleFlags) -> Self {
        self.allowed_roles = allowed_roles;
        self
    }

    pub fn classify(
        &self,
        entities: &[AnnotatedEntity],
        labels: &DependencyLabelMap,
    ) -> Categorized<Vec<Entity>> {
        let mut buckets: Categorized<Vec<Entity>> = Categorized::default();

        for raw in entities {
            if self.stopwords.contains(&raw.name) {
                continue;
            }

            let category = route(raw.kind);
            if category == Category::Other && !self.passes_gate(raw, labels) {
                continue;
            }

            buckets.push(
                category,
                Entity {
                    name: raw.name.clone(),
                    stat: raw.sentiment,
                },
            );
        }

        debug!(
            input = entities.len(),
            events = buckets.events.len(),
            people = buckets.people.len(),
            locations = buckets.locations.len(),
            other = buckets.other.len(),
            "classified entities"
        );

        buckets
    }

    /// True if any word of any mention carries an allowed role.
    /// Offsets the syntax pass never produced count as not allowed.
    fn passes_gate(&self, entity: &AnnotatedEntity, labels: &DependencyLabelMap) -> bool {
        entity.mentions.iter().any(|mention| {
            mention_words(&mention.text).any(|(offset, word)| match labels.label_at(offset) {
                Some(label) => self.allowed_roles.admits(label),
                None => {
                    debug!(entity = %entity.name, offset, word, "no syntax token at mention offset");
                    false
                }
            })
        })
    }
}
