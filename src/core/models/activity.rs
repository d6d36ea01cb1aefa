use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current sign-ups. Negative when the server over-allocates.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    /// Drop every entry equal to `email`. Returns whether anything was removed.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != email);
        self.participants.len() != before
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ActivityCollection(IndexMap<String, Activity>);

impl ActivityCollection {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.0.get_mut(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.0.iter()
    }
}

#[cfg(test)]
impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
