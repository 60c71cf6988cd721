use indexmap::{IndexMap, map::Entry};

use crate::model::{Participant, ParticipantName, UpsertKind};

/// Participants keyed by name, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    participants: IndexMap<ParticipantName, Participant>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates a participant. Returns `None` (and does nothing) for an empty name.
    pub fn upsert_participant(&mut self, name: &str, contact: Option<&str>) -> Option<UpsertKind> {
        let name = ParticipantName::new(name)?;
        let participant = Participant {
            contact: contact
                .map(str::trim)
                .filter(|contact| !contact.is_empty())
                .map(str::to_owned),
        };

        let kind = match self.participants.entry(name) {
            Entry::Occupied(mut entry) => {
                entry.insert(participant);
                UpsertKind::Updated
            }
            Entry::Vacant(entry) => {
                entry.insert(participant);
                UpsertKind::Added
            }
        };
        Some(kind)
    }

    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.get(name)
    }

    pub fn resolve(&self, name: &str) -> Option<&ParticipantName> {
        self.participants.get_key_value(name).map(|(key, _)| key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.participants.contains_key(name)
    }

    pub fn contact(&self, name: &str) -> Option<&str> {
        self.get(name)?.contact.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &ParticipantName> + '_ {
        self.participants.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantName, &Participant)> + '_ {
        self.participants.iter()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn clear(&mut self) {
        self.participants.clear();
    }
}
