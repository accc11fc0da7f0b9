//! Search normalization exercised end to end, including the flow where
//! an assistant reply records the sources it drew from.

mod common;

use parley_conversations::{Conversation, Message, MessageRole};
use parley_search::mock::MockSearchService;
use parley_search::{InstantAnswerResponse, SearchService};

use crate::common::test_state;

fn fixture(value: serde_json::Value) -> InstantAnswerResponse {
    serde_json::from_value(value).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_search_normalizes_summary_and_sources() {
    let service = MockSearchService::with_response(fixture(serde_json::json!({
        "AbstractText": "Rust is a systems programming language.",
        "AbstractSource": "Wikipedia",
        "AbstractURL": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
        "RelatedTopics": [
            {"Text": "Cargo", "FirstURL": "https://doc.rust-lang.org/cargo/"},
            {"Text": "Crates.io", "FirstURL": "https://crates.io/"},
            {"Text": "dup", "FirstURL": "https://crates.io/"}
        ]
    })));

    let results = service.search("rust language").await.unwrap();

    assert_eq!(results.summary, "Rust is a systems programming language.");
    assert_eq!(
        results.sources,
        vec![
            "Wikipedia",
            "https://en.wikipedia.org/wiki/Rust_(programming_language)",
            "https://doc.rust-lang.org/cargo/",
            "https://crates.io/"
        ]
    );
    assert_eq!(service.recorded_queries(), vec!["rust language"]);

    // Swapping the canned response flows through the same normalization
    service.set_response(fixture(serde_json::json!({"Answer": "rerouted"})));
    let results = service.search("again").await.unwrap();
    assert_eq!(results.summary, "rerouted");
    assert!(results.sources.is_empty());
}

#[test_log::test(tokio::test)]
async fn test_instant_answer_round_trip() {
    let service = MockSearchService::with_response(fixture(serde_json::json!({
        "Answer": "42",
        "AnswerType": "calc"
    })));

    let answer = service.instant_answer("the answer").await.unwrap();
    assert_eq!(answer.answer, "42");
    assert_eq!(answer.answer_type, "calc");
}

#[test_log::test(tokio::test)]
async fn test_instant_answer_absent_is_a_structured_failure() {
    let service = MockSearchService::with_response(fixture(serde_json::json!({
        "RelatedTopics": [{"Text": "tangent", "FirstURL": "https://example.com"}]
    })));

    let err = service.instant_answer("obscure").await.unwrap_err();
    assert_eq!(err.to_string(), "No instant answer available");
}

#[test_log::test(tokio::test)]
async fn test_assistant_reply_carries_search_sources() {
    let state = test_state();
    let repos = &state.conversations;

    let conv = repos
        .conversations
        .create(Conversation::new("Research").unwrap())
        .await;
    repos
        .messages
        .create(Message::new_user(conv.id, "what is rust?".to_string()).unwrap())
        .await;

    // The search agent answers through the composed service handle
    let results = state.search.search("what is rust?").await.unwrap();
    repos
        .messages
        .create(
            Message::new_assistant(
                conv.id,
                results.summary.clone(),
                Some(serde_json::json!({"sources": results.sources})),
            )
            .unwrap(),
        )
        .await;

    let history = repos.messages.list_by_conversation(conv.id).await;
    assert_eq!(history.len(), 2);

    let reply = &history[1];
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, results.summary);
    let metadata = reply.metadata.as_ref().unwrap();
    assert_eq!(
        metadata["sources"].as_array().unwrap().len(),
        results.sources.len()
    );
}
