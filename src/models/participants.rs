//! Ordered, duplicate-free participant list.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Outcome of toggling a name on a participant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Participation {
    Joined,
    Left,
}

/// Display names in join order, at most one entry per name.
///
/// Serialized as a plain JSON array. Duplicates in stored data are dropped on
/// load, keeping the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Participants {
    order: Vec<String>,
    members: HashSet<String>,
}

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in join order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Append `name` if absent. Returns false when it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.members.insert(name.to_string()) {
            return false;
        }
        self.order.push(name.to_string());
        true
    }

    /// Remove `name`. Returns false when it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.members.remove(name) {
            return false;
        }
        self.order.retain(|n| n != name);
        true
    }

    /// Remove `name` if present, otherwise append it.
    pub fn toggle(&mut self, name: &str) -> Participation {
        if self.remove(name) {
            Participation::Left
        } else {
            self.insert(name);
            Participation::Joined
        }
    }
}

impl From<Vec<String>> for Participants {
    fn from(names: Vec<String>) -> Self {
        let mut participants = Participants::new();
        for name in &names {
            participants.insert(name);
        }
        participants
    }
}

impl From<Participants> for Vec<String> {
    fn from(participants: Participants) -> Self {
        participants.order
    }
}

impl<'a> FromIterator<&'a str> for Participants {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut participants = Participants::new();
        for name in iter {
            participants.insert(name);
        }
        participants
    }
}
