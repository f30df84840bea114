//! IntakeController: runs session turns and their side effects.

use std::sync::Arc;

use chrono::Utc;

use crate::store::RecordStore;

use super::generator::QuestionGenerator;
use super::model::{CandidateRecord, ChatEntry};
use super::session::{IntakeSession, IntakeStatus, Step, Turn};
use super::state::Stage;

/// Owns one intake session and carries out what each turn needs: question
/// generation on the tech-stack answer and saving the finished record.
pub struct IntakeController {
    session: IntakeSession,
    generator: QuestionGenerator,
    store: Arc<dyn RecordStore>,
}

impl IntakeController {
    pub fn new(generator: QuestionGenerator, store: Arc<dyn RecordStore>) -> Self {
        Self::with_session(IntakeSession::new(), generator, store)
    }

    pub fn with_session(
        session: IntakeSession,
        generator: QuestionGenerator,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        tracing::info!(session = %session.id(), stage = %session.stage(), "Intake session started");
        Self {
            session,
            generator,
            store,
        }
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    pub fn messages(&self) -> &[ChatEntry] {
        self.session.messages()
    }

    pub fn candidate(&self) -> &CandidateRecord {
        self.session.candidate()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    pub fn status(&self) -> IntakeStatus {
        self.session.status()
    }

    /// Process one user input and return the assistant reply.
    ///
    /// Never fails: generation errors become an apology that keeps the
    /// tech-stack stage open, and store errors are logged while the reply is
    /// still delivered.
    pub async fn handle_input(&mut self, input: &str) -> String {
        let turn = match self.session.step(input) {
            Step::Done(turn) => turn,
            Step::NeedsQuestions {
                session,
                tech_stack,
            } => self.finish_tech_stack(session, &tech_stack).await,
        };

        let Turn { session, reply } = turn;
        self.session = session;
        reply
    }

    async fn finish_tech_stack(&self, session: IntakeSession, tech_stack: &str) -> Turn {
        let questions = match self.generator.generate_questions(tech_stack).await {
            Ok(questions) => questions,
            Err(e) => {
                tracing::warn!(session = %session.id(), "Question generation failed: {}", e);
                return session.reject_tech_stack();
            }
        };

        let turn = session.complete_with_questions(tech_stack, &questions);
        tracing::info!(session = %turn.session.id(), "Intake completed");

        match turn.session.completed_record(Utc::now()) {
            Some(record) => {
                if let Err(e) = self.store.append(&record).await {
                    tracing::error!(
                        session = %record.session_id,
                        "Failed to persist candidate record: {}",
                        e
                    );
                }
            }
            None => tracing::warn!(
                session = %turn.session.id(),
                "Intake ended without a tech stack; record not saved"
            ),
        }

        turn
    }
}
