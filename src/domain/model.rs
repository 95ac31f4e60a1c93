use serde::{Deserialize, Serialize};

/// Opaque participant identifier. Uniqueness across couples is a caller
/// concern, checked at the input boundary rather than by the engine.
pub type Participant = String;

/// An unordered pair of participants who may not gift each other.
/// Deserializes from a two-element JSON array, e.g. `["Alice", "Bob"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple(pub Participant, pub Participant);

impl Couple {
    pub fn new(a: impl Into<Participant>, b: impl Into<Participant>) -> Self {
        Couple(a.into(), b.into())
    }

    pub fn contains(&self, person: &str) -> bool {
        self.0 == person || self.1 == person
    }
}

/// A single giver → recipient match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: Participant,
    pub recipient: Participant,
}

/// A complete draw: every participant appears exactly once as giver and
/// exactly once as recipient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assignment {
    pub pairings: Vec<Pairing>,
}

impl Assignment {
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pairing> {
        self.pairings.iter()
    }

    /// Recipient assigned to the given giver, if any.
    pub fn recipient_of(&self, giver: &str) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|p| p.giver == giver)
            .map(|p| &p.recipient)
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}
