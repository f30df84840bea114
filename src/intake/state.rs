//! Intake stage machine: tracks which field is being collected next.

use serde::{Deserialize, Serialize};

/// The stages of the intake conversation.
///
/// Progresses linearly: Name → Email → Phone → Experience → Position →
/// Location → TechStack → Completed. An exit keyword may jump straight to
/// Completed from any stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
    Completed,
}

impl Stage {
    /// Every field-collecting stage, in order.
    pub const FIELDS: [Stage; 7] = [
        Stage::Name,
        Stage::Email,
        Stage::Phone,
        Stage::Experience,
        Stage::Position,
        Stage::Location,
        Stage::TechStack,
    ];

    /// Check if a transition from `self` to `target` is a single forward step.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        self.next() == Some(target)
    }

    /// Whether this stage is terminal (intake is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get the next stage in the linear progression, if any.
    pub fn next(&self) -> Option<Stage> {
        use Stage::*;
        match self {
            Name => Some(Email),
            Email => Some(Phone),
            Phone => Some(Experience),
            Experience => Some(Position),
            Position => Some(Location),
            Location => Some(TechStack),
            TechStack => Some(Completed),
            Completed => None,
        }
    }

    /// Position in the fixed order; Completed sorts after every field.
    pub fn ordinal(&self) -> usize {
        Self::FIELDS
            .iter()
            .position(|s| s == self)
            .unwrap_or(Self::FIELDS.len())
    }

    /// Whether the conversation has moved beyond `field`.
    pub fn is_past(&self, field: Stage) -> bool {
        self.ordinal() > field.ordinal()
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Experience => "experience",
            Self::Position => "position",
            Self::Location => "location",
            Self::TechStack => "tech_stack",
            Self::Completed => "completed",
        };
        write!(f, "{s}")
    }
}
