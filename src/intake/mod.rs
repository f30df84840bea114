//! Candidate intake: the scripted screening conversation.
//!
//! The candidate answers a fixed sequence of questions (name, email, phone,
//! experience, position, location, tech stack). Each answer is checked for
//! format before the conversation moves on. The tech-stack answer is turned
//! into interview questions by the LLM, and the finished record is saved.

pub mod controller;
pub mod generator;
pub mod model;
pub mod prompts;
pub mod session;
pub mod state;
pub mod validation;

pub use controller::IntakeController;
pub use generator::QuestionGenerator;
pub use model::{CandidateRecord, ChatEntry, CompletedRecord, Speaker};
pub use session::{IntakeSession, IntakeStatus, Step, Turn};
pub use state::Stage;
