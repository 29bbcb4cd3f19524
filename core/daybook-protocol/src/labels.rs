#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Entity type as reported by the NLP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EntityType {
    Person,
    Location,
    Organization,
    Event,
    WorkOfArt,
    ConsumerGood,
    Other,
    PhoneNumber,
    Address,
    Date,
    Number,
    Price,
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// Syntactic role of a token relative to its governing word.
///
/// Only the labels the pipeline reasons about are spelled out; everything
/// else the backend emits decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DependencyLabel {
    Root,
    Nsubj,      // Nominal subject
    Nsubjpass,  // Passive nominal subject
    Dobj,       // Direct object
    Iobj,       // Indirect object
    Pobj,       // Object of a preposition
    Prep,
    Amod,
    Advmod,
    Det,
    Poss,
    Nn,
    Attr,
    Acomp,
    Xcomp,
    Ccomp,
    Aux,
    Cc,
    Conj,
    Neg,
    Num,
    P,
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl DependencyLabel {
    /// The role flag this label contributes to a gate check.
    /// Labels with no gate relevance map to the empty set.
    pub fn role(self) -> RoleFlags {
        match self {
            DependencyLabel::Nsubj => RoleFlags::NSUBJ,
            DependencyLabel::Nsubjpass => RoleFlags::NSUBJPASS,
            DependencyLabel::Dobj => RoleFlags::DOBJ,
            DependencyLabel::Iobj => RoleFlags::IOBJ,
            DependencyLabel::Pobj => RoleFlags::POBJ,
            _ => RoleFlags::empty(),
        }
    }
}

bitflags! {
    /// Set of dependency roles that make an `OTHER` entity salient.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct RoleFlags: u32 {
        // Subjects (excluded from the default gate)
        const NSUBJ = 1;
        const NSUBJPASS = 2;

        // Objects
        const DOBJ = 4;
        const IOBJ = 8;
        const POBJ = 16;

        const OBJECTS = Self::DOBJ.bits() | Self::IOBJ.bits() | Self::POBJ.bits();
    }
}

impl Default for RoleFlags {
    fn default() -> Self {
        RoleFlags::OBJECTS
    }
}

impl RoleFlags {
    /// Whether `label` carries one of the roles in this set.
    pub fn admits(self, label: DependencyLabel) -> bool {
        self.intersects(label.role())
    }
}
