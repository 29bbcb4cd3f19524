use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use core::fmt;

/// Raw polarity (`score`, in [-1, 1]) and intensity (`magnitude`, >= 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct SentimentStat {
    #[cfg_attr(feature = "serde", serde(default))]
    pub score: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: f64,
}

impl SentimentStat {
    pub const fn new(score: f64, magnitude: f64) -> Self {
        Self { score, magnitude }
    }
}

/// A named thing with its (possibly merged) sentiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Entity {
    pub name: String,
    pub stat: SentimentStat,
}

impl Entity {
    pub fn new(name: impl Into<String>, score: f64, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            stat: SentimentStat::new(score, magnitude),
        }
    }

    /// Whitespace-delimited tokens of the name. Merge identity is this set,
    /// not the name string.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.name.split_whitespace()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Events,
    People,
    Locations,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Events,
        Category::People,
        Category::Locations,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::People => "people",
            Category::Locations => "locations",
            Category::Other => "other",
        }
    }

    /// Heading used by console reports.
    pub fn title(self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::People => "People",
            Category::Locations => "Locations",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per category.
///
/// Stages that touch categories go through [`Categorized::map`], so all four
/// lists always run through the same code.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Categorized<T> {
    pub events: T,
    pub people: T,
    pub locations: T,
    pub other: T,
}

impl<T> Categorized<T> {
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self {
            events: f(Category::Events),
            people: f(Category::People),
            locations: f(Category::Locations),
            other: f(Category::Other),
        }
    }

    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Events => &self.events,
            Category::People => &self.people,
            Category::Locations => &self.locations,
            Category::Other => &self.other,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Events => &mut self.events,
            Category::People => &mut self.people,
            Category::Locations => &mut self.locations,
            Category::Other => &mut self.other,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(Category, T) -> U) -> Categorized<U> {
        Categorized {
            events: f(Category::Events, self.events),
            people: f(Category::People, self.people),
            locations: f(Category::Locations, self.locations),
            other: f(Category::Other, self.other),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl<T> Categorized<Vec<T>> {
    pub fn push(&mut self, category: Category, item: T) {
        self.get_mut(category).push(item);
    }

    /// Appends every list of `other` to the matching list of `self`.
    pub fn append(&mut self, other: Categorized<Vec<T>>) {
        let Categorized {
            events,
            people,
            locations,
            other,
        } = other;
        self.events.extend(events);
        self.people.extend(people);
        self.locations.extend(locations);
        self.other.extend(other);
    }

    pub fn total_len(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }
}

/// A merged entity with its combined weight.
///
/// The raw statistics travel with the weight so a stored result can be pooled
/// and re-merged across journals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct RankedEntity {
    pub name: String,
    pub weight: f64,
    pub stat: SentimentStat,
}

impl RankedEntity {
    pub fn to_entity(&self) -> Entity {
        Entity {
            name: self.name.clone(),
            stat: self.stat,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct ScoredSentence {
    pub text: String,
    pub begin_offset: usize,
    pub weight: f64,
}

/// Emotional profile of one journal entry.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct JournalResult {
    pub document_sentiment: f64,
    pub entities: Categorized<Vec<RankedEntity>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentences: Vec<ScoredSentence>,
}

/// Archived stopword list.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub words: Vec<String>,
}
