//! End-to-end intake runs through the public API.
//!
//! Each test drives a controller backed by a real `JsonFileStore` in a temp
//! directory and a stub LLM provider (no real API calls).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use talent_scout::cli;
use talent_scout::error::LlmError;
use talent_scout::intake::{IntakeController, QuestionGenerator, Stage, prompts};
use talent_scout::llm::{CompletionRequest, CompletionResponse, LlmProvider, Role};
use talent_scout::store::{JsonFileStore, RecordStore};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

const QUESTIONS: &str = "1. How would you profile a slow Python endpoint?\n\
                         2. When would you add a partial index in Postgres?\n\
                         3. How do you manage Postgres connections from a Python web app?";

/// Stub provider that checks the request shape and returns fixed questions.
struct StubLlm;

#[async_trait]
impl LlmProvider for StubLlm {
    fn model_name(&self) -> &str {
        "stub"
    }

    fn cost_per_token(&self) -> (Decimal, Decimal) {
        (Decimal::ZERO, Decimal::ZERO)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        assert_eq!(request.messages[0].role, Role::System);
        assert!(request.messages[1].content.contains("Python, Postgres"));
        Ok(CompletionResponse {
            content: format!("  {QUESTIONS}\n"),
            input_tokens: 0,
            output_tokens: 0,
        })
    }
}

fn controller(store: Arc<JsonFileStore>) -> IntakeController {
    IntakeController::new(QuestionGenerator::new(Arc::new(StubLlm)), store)
}

#[tokio::test]
async fn round_trip_persists_one_complete_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));
    let mut controller = controller(store.clone());

    let answers = [
        ("John Doe", Stage::Email),
        ("john@x.com", Stage::Phone),
        ("1234567890", Stage::Experience),
        ("3", Stage::Position),
        ("Backend Dev", Stage::Location),
        ("NYC", Stage::TechStack),
        ("Python, Postgres", Stage::Completed),
    ];

    tokio::time::timeout(TEST_TIMEOUT, async {
        for (answer, expected) in answers {
            controller.handle_input(answer).await;
            assert_eq!(controller.stage(), expected, "after answering {answer:?}");
        }
    })
    .await
    .expect("intake run hung");

    let reply = &controller.messages().last().unwrap().content;
    assert!(reply.contains(QUESTIONS));

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(record.candidate.is_complete());
    assert_eq!(record.candidate.name, "John Doe");
    assert_eq!(record.candidate.email, "john@x.com");
    assert_eq!(record.candidate.phone, "1234567890");
    assert_eq!(record.candidate.experience, "3");
    assert_eq!(record.candidate.position, "Backend Dev");
    assert_eq!(record.candidate.location, "NYC");
    assert_eq!(record.candidate.tech_stack, "Python, Postgres");

    // The timestamp on disk is RFC 3339 UTC.
    let raw = std::fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let stamp = json[0]["completed_at"].as_str().unwrap();
    let parsed: DateTime<Utc> = stamp.parse().unwrap();
    assert!(parsed <= Utc::now());
}

#[tokio::test]
async fn empty_name_still_persists_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));
    let mut controller = controller(store.clone());

    let answers = ["", "john@x.com", "1234567890", "3", "Backend Dev", "NYC", "Python, Postgres"];
    for answer in answers {
        controller.handle_input(answer).await;
    }
    assert_eq!(controller.stage(), Stage::Completed);

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate.name, "");
    assert!(!records[0].candidate.is_complete());
    assert_eq!(records[0].candidate.tech_stack, "Python, Postgres");
}

#[tokio::test]
async fn transcript_records_each_exchange() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));
    let mut controller = controller(store);

    controller.handle_input("John Doe").await;
    controller.handle_input("not-an-email").await;

    let contents: Vec<&str> = controller
        .messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(
        contents,
        vec![
            prompts::WELCOME,
            "John Doe",
            prompts::stage_prompt(Stage::Email),
            "not-an-email",
            prompts::validation_warning(Stage::Email),
        ]
    );
}

#[tokio::test]
async fn terminal_session_completes_and_saves() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));
    let mut controller = controller(store.clone());

    let input: &[u8] = b"John Doe\njohn@x.com\n12345\n1234567890\n-1\n0\nBackend Dev\nNYC\nPython, Postgres\n";
    let mut output = Vec::new();

    tokio::time::timeout(TEST_TIMEOUT, cli::run(&mut controller, input, &mut output))
        .await
        .expect("terminal session hung")
        .unwrap();

    assert!(controller.is_completed());
    assert_eq!(controller.candidate().experience, "0");

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains(prompts::validation_warning(Stage::Phone)));
    assert!(transcript.contains(prompts::validation_warning(Stage::Experience)));
    assert!(transcript.contains(QUESTIONS));

    assert_eq!(store.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn exit_mid_intake_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("candidates.json")));
    let mut controller = controller(store.clone());

    for answer in ["John Doe", "john@x.com", "1234567890"] {
        controller.handle_input(answer).await;
    }
    let reply = controller
        .handle_input("bye, I have 5 years experience")
        .await;

    assert_eq!(reply, prompts::FAREWELL);
    assert_eq!(controller.stage(), Stage::Completed);
    assert!(controller.candidate().experience.is_empty());
    assert!(store.load_all().await.unwrap().is_empty());
}
