use serde::{Deserialize, Serialize};

/// A student eligible for a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    /// Display name, shown on the first line of the seat
    pub name: String,
    /// Student identifier, kept verbatim (never reinterpreted as a number)
    pub id: String,
}

impl Occupant {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Ordered list of occupants. Order is the source row order until shuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Occupant>);

impl Roster {
    #[must_use]
    pub fn new(occupants: Vec<Occupant>) -> Self {
        Self(occupants)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occupant> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Occupant] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Occupant] {
        &mut self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Occupant> {
        self.0
    }
}

impl FromIterator<Occupant> for Roster {
    fn from_iter<I: IntoIterator<Item = Occupant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Roster {
    type Item = Occupant;
    type IntoIter = std::vec::IntoIter<Occupant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Occupant;
    type IntoIter = std::slice::Iter<'a, Occupant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
