//! State owned by the activity board and the card data derived from it.

use super::activity::{Activity, ActivityCollection};
use super::participant::{participant_rows, ParticipantRow};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const EMPTY_PARTICIPANTS_TEXT: &str = "No participants yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// The collection most recently fetched plus whether that fetch worked.
///
/// Every successful load replaces the collection wholesale. Between loads the
/// only edit is dropping a participant after the server confirmed removal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub status: LoadState,
    activities: ActivityCollection,
}

impl BoardState {
    pub fn loaded(&mut self, activities: ActivityCollection) {
        self.activities = activities;
        self.status = LoadState::Ready;
    }

    /// The list area switches to the failure text; selector options stay.
    pub fn load_failed(&mut self) {
        self.status = LoadState::Failed;
    }

    pub fn activities(&self) -> &ActivityCollection {
        &self.activities
    }

    /// Apply a confirmed unregister locally.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        self.activities
            .get_mut(activity)
            .map(|a| a.remove_participant(email))
            .unwrap_or(false)
    }

    /// Names offered by the signup selector, in card order.
    pub fn activity_names(&self) -> Vec<String> {
        self.activities.names()
    }

    pub fn card(&self, name: &str) -> Option<ActivityCard> {
        self.activities
            .get(name)
            .map(|activity| ActivityCard::new(name, activity))
    }

    pub fn cards(&self) -> Vec<ActivityCard> {
        self.activities
            .iter()
            .map(|(name, activity)| ActivityCard::new(name, activity))
            .collect()
    }
}

/// Everything one activity card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: participant_rows(&activity.participants),
        }
    }

    pub fn participants_header(&self) -> String {
        format!("Participants ({})", self.participants.len())
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}
