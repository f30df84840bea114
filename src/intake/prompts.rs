//! Assistant copy for each stage and the question-generation instruction.

use super::state::Stage;

/// First assistant message of every session.
pub const WELCOME: &str = "\
Hello! 👋 Welcome to **TalentScout**, your AI-powered hiring assistant.

I'll help with the **initial screening process** by collecting some basic information \
and then asking a few **technical questions based on your tech stack**.

Let's get started.

👉 What is your **full name**?";

pub const FAREWELL: &str = "\
🙏 Thank you for your time!

Your information has been recorded successfully.
Our recruitment team will reach out if your profile matches.

Have a great day!";

pub const ALREADY_COMPLETED: &str = "✅ This conversation has already been completed.";

/// System role for the question-generation call.
pub const INTERVIEWER_SYSTEM_PROMPT: &str = "You are a professional technical interviewer.";

/// The question asked when `stage` becomes active.
pub fn stage_prompt(stage: Stage) -> &'static str {
    match stage {
        Stage::Name => "What is your **full name**?",
        Stage::Email => "Thanks! What is your **email address**?",
        Stage::Phone => "Please share your **phone number** (digits only).",
        Stage::Experience => "How many **years of experience** do you have?",
        Stage::Position => "What **position(s)** are you applying for?",
        Stage::Location => "Where is your **current location**?",
        Stage::TechStack => {
            "Please list your **tech stack**.\n\n\
             Include programming languages, frameworks, databases, and tools."
        }
        Stage::Completed => ALREADY_COMPLETED,
    }
}

/// Warning shown when an answer for `stage` fails validation.
pub fn validation_warning(stage: Stage) -> &'static str {
    match stage {
        Stage::Email => "⚠️ Please enter a valid email address (e.g., name@gmail.com).",
        Stage::Phone => "⚠️ Please enter a valid phone number (10–15 digits only).",
        Stage::Experience => "⚠️ Please enter years of experience as a number (e.g., 2 or 3.5).",
        _ => "⚠️ Please try that answer again.",
    }
}

/// Closing reply that embeds the generated questions.
pub fn completion_reply(questions: &str) -> String {
    format!(
        "🧠 **Technical Questions Based on Your Tech Stack:**\n\n\
         {questions}\n\n\
         ✅ Thank you for completing the initial screening!\n\
         Our recruitment team will contact you with next steps."
    )
}

/// Reply when question generation fails; the tech-stack stage stays open.
pub const GENERATION_FAILED: &str = "\
😔 Sorry, I couldn't generate your technical questions just now.

Please send your **tech stack** again to retry.";

/// Instruction asking for interview questions about `tech_stack`.
pub fn technical_questions_prompt(tech_stack: &str) -> String {
    format!(
        "You are an experienced technical interviewer.\n\n\
         The candidate has declared the following tech stack:\n\
         {tech_stack}\n\n\
         Generate 3 to 5 technical interview questions to assess the candidate's practical knowledge.\n\n\
         Guidelines:\n\
         - Focus on real-world usage, not definitions\n\
         - One or more questions per technology if possible\n\
         - Questions should be concise and clear\n\n\
         Return ONLY the questions as a numbered list."
    )
}
