//! Intake session state and the pure per-turn transition.
//!
//! `IntakeSession::step` never performs I/O. When the tech-stack answer
//! arrives it hands back `Step::NeedsQuestions` and the caller finishes the
//! turn with either `complete_with_questions` or `reject_tech_stack`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::model::{CandidateRecord, ChatEntry, CompletedRecord};
use super::prompts;
use super::state::Stage;
use super::validation;

/// One conversation: transcript, current stage and collected answers.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeSession {
    id: Uuid,
    messages: Vec<ChatEntry>,
    stage: Stage,
    candidate: CandidateRecord,
    /// Set when an exit keyword ended the conversation before the tech stack.
    exited: bool,
}

/// A finished turn: the next session and the reply to show.
#[derive(Debug, Clone)]
pub struct Turn {
    pub session: IntakeSession,
    pub reply: String,
}

/// Result of feeding one input to a session.
#[derive(Debug, Clone)]
pub enum Step {
    /// The turn is finished; the reply is already in the transcript.
    Done(Turn),
    /// The tech-stack answer arrived and questions must be generated before
    /// the turn can finish. The user's message is already in the transcript.
    NeedsQuestions {
        session: IntakeSession,
        tech_stack: String,
    },
}

/// Serializable progress snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeStatus {
    pub session_id: Uuid,
    pub stage: Stage,
    pub completed: bool,
    pub candidate: CandidateRecord,
}

impl IntakeSession {
    /// Start a session at the Name stage with the welcome message logged.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatEntry::assistant(prompts::WELCOME)],
            stage: Stage::default(),
            candidate: CandidateRecord::default(),
            exited: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn messages(&self) -> &[ChatEntry] {
        &self.messages
    }

    pub fn candidate(&self) -> &CandidateRecord {
        &self.candidate
    }

    pub fn is_completed(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn status(&self) -> IntakeStatus {
        IntakeStatus {
            session_id: self.id,
            stage: self.stage,
            completed: self.is_completed(),
            candidate: self.candidate.clone(),
        }
    }

    /// Apply one user input.
    ///
    /// Order of checks:
    /// 1. An exit keyword anywhere in the input ends the conversation, even
    ///    when the input would otherwise be a valid answer.
    /// 2. Input after completion is answered but not logged.
    /// 3. Otherwise the input is logged and handled by the current stage.
    pub fn step(&self, input: &str) -> Step {
        let mut next = self.clone();

        if validation::contains_exit_keyword(input) {
            next.messages.push(ChatEntry::user(input));
            next.exited |= !next.stage.is_terminal();
            next.stage = Stage::Completed;
            return Step::Done(next.reply_with(prompts::FAREWELL));
        }

        if next.stage.is_terminal() {
            return Step::Done(next.reply_with(prompts::ALREADY_COMPLETED));
        }

        next.messages.push(ChatEntry::user(input));

        let stage = next.stage;
        if stage == Stage::TechStack {
            return Step::NeedsQuestions {
                session: next,
                tech_stack: input.to_string(),
            };
        }

        if !validation::validate(stage, input) {
            return Step::Done(next.reply_with(prompts::validation_warning(stage)));
        }

        next.candidate.record(stage, input);
        let advanced = next.advance();
        Step::Done(next.reply_with(prompts::stage_prompt(advanced)))
    }

    /// Finish a tech-stack turn with the generated questions.
    ///
    /// Records the tech stack, logs the closing reply and completes the
    /// session. A session not waiting on the tech stack is returned unchanged
    /// with the already-completed reply.
    pub fn complete_with_questions(&self, tech_stack: &str, questions: &str) -> Turn {
        let mut next = self.clone();
        if next.stage != Stage::TechStack {
            return next.reply_with(prompts::ALREADY_COMPLETED);
        }
        next.candidate.record(Stage::TechStack, tech_stack);
        next.advance();
        next.reply_with(&prompts::completion_reply(questions))
    }

    /// Finish a tech-stack turn whose question generation failed. Nothing is
    /// recorded and the stage stays open for a retry.
    pub fn reject_tech_stack(&self) -> Turn {
        self.clone().reply_with(prompts::GENERATION_FAILED)
    }

    /// The record to persist once the tech-stack stage has completed the
    /// session. Answers left empty along the way are saved as empty strings.
    /// Sessions ended by an exit keyword have nothing to persist.
    pub fn completed_record(&self, completed_at: DateTime<Utc>) -> Option<CompletedRecord> {
        if !self.is_completed() || self.exited {
            return None;
        }
        Some(CompletedRecord {
            session_id: self.id,
            candidate: self.candidate.clone(),
            completed_at,
        })
    }

    fn advance(&mut self) -> Stage {
        let next = self.stage.next().unwrap_or(Stage::Completed);
        debug_assert!(self.stage.can_transition_to(next));
        tracing::debug!(session = %self.id, from = %self.stage, to = %next, "Intake stage advanced");
        self.stage = next;
        next
    }

    fn reply_with(mut self, reply: &str) -> Turn {
        self.messages.push(ChatEntry::assistant(reply));
        Turn {
            session: self,
            reply: reply.to_string(),
        }
    }
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}
