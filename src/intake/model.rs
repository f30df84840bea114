//! Candidate record and transcript models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::Stage;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

/// One line of the intake transcript. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub role: Speaker,
    pub content: String,
}

impl ChatEntry {
    pub fn user(content: &str) -> Self {
        Self {
            role: Speaker::User,
            content: content.to_string(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: Speaker::Assistant,
            content: content.to_string(),
        }
    }
}

/// Answers collected from one candidate, one field per stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub position: String,
    pub location: String,
    pub tech_stack: String,
}

impl CandidateRecord {
    /// The answer held for a field stage. `None` for Completed.
    pub fn field(&self, stage: Stage) -> Option<&str> {
        let value = match stage {
            Stage::Name => &self.name,
            Stage::Email => &self.email,
            Stage::Phone => &self.phone,
            Stage::Experience => &self.experience,
            Stage::Position => &self.position,
            Stage::Location => &self.location,
            Stage::TechStack => &self.tech_stack,
            Stage::Completed => return None,
        };
        Some(value.as_str())
    }

    /// Store the answer for `stage`. Already-set fields are left alone.
    pub(crate) fn record(&mut self, stage: Stage, value: &str) {
        let slot = match stage {
            Stage::Name => &mut self.name,
            Stage::Email => &mut self.email,
            Stage::Phone => &mut self.phone,
            Stage::Experience => &mut self.experience,
            Stage::Position => &mut self.position,
            Stage::Location => &mut self.location,
            Stage::TechStack => &mut self.tech_stack,
            Stage::Completed => return,
        };
        if slot.is_empty() {
            *slot = value.to_string();
        } else {
            tracing::warn!(%stage, "Ignoring second answer for an already-recorded field");
        }
    }

    /// Whether every field holds an answer.
    pub fn is_complete(&self) -> bool {
        Stage::FIELDS
            .iter()
            .all(|s| self.field(*s).is_some_and(|v| !v.is_empty()))
    }
}

/// A finished candidate record as written to the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRecord {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub candidate: CandidateRecord,
    pub completed_at: DateTime<Utc>,
}
