//! Store behavior across domains: conversation/message consistency and
//! the seeded agent roster, exercised through the composed `AppState`.

mod common;

use std::time::Duration;

use parley_agents::{AgentType, AgentUpdate};
use parley_conversations::{Conversation, Message};
use uuid::Uuid;

use crate::common::test_state;

/// Give consecutive timestamps room to differ on coarse clocks
async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

#[test_log::test(tokio::test)]
async fn test_list_conversations_most_recently_active_first() {
    let state = test_state();
    let repos = &state.conversations;

    let first = repos
        .conversations
        .create(Conversation::new("first").unwrap())
        .await;
    tick().await;
    let second = repos
        .conversations
        .create(Conversation::new("second").unwrap())
        .await;
    tick().await;
    let third = repos
        .conversations
        .create(Conversation::new("third").unwrap())
        .await;

    let listed: Vec<Uuid> = repos
        .conversations
        .list()
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, vec![third.id, second.id, first.id]);

    // New activity in the oldest thread moves it to the front
    tick().await;
    repos
        .messages
        .create(Message::new_user(first.id, "hello again".to_string()).unwrap())
        .await;

    let listed: Vec<Uuid> = repos
        .conversations
        .list()
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(listed, vec![first.id, third.id, second.id]);
}

#[test_log::test(tokio::test)]
async fn test_message_creation_advances_parent_activity_timestamp() {
    let state = test_state();
    let repos = &state.conversations;

    let conv = repos
        .conversations
        .create(Conversation::new("Chat").unwrap())
        .await;
    tick().await;

    let message = repos
        .messages
        .create(Message::new_user(conv.id, "hi".to_string()).unwrap())
        .await;

    let parent = repos.conversations.find(conv.id).await.unwrap();
    assert!(parent.updated_at >= message.created_at);
    assert!(parent.updated_at > conv.updated_at);
}

#[test_log::test(tokio::test)]
async fn test_cascading_delete_leaves_no_orphans() {
    let state = test_state();
    let repos = &state.conversations;

    let doomed = repos
        .conversations
        .create(Conversation::new("Doomed").unwrap())
        .await;
    let survivor = repos
        .conversations
        .create(Conversation::new("Survivor").unwrap())
        .await;

    let mut doomed_messages = Vec::new();
    for content in ["one", "two", "three"] {
        let message = repos
            .messages
            .create(Message::new_user(doomed.id, content.to_string()).unwrap())
            .await;
        doomed_messages.push(message);
    }
    repos
        .messages
        .create(Message::new_user(survivor.id, "untouched".to_string()).unwrap())
        .await;

    assert!(repos.conversations.delete(doomed.id).await);

    assert!(repos.conversations.find(doomed.id).await.is_none());
    assert!(repos
        .messages
        .list_by_conversation(doomed.id)
        .await
        .is_empty());
    for message in doomed_messages {
        assert!(repos.messages.find(message.id).await.is_none());
    }

    // The surviving thread keeps its history
    assert_eq!(
        repos.messages.list_by_conversation(survivor.id).await.len(),
        1
    );
}

#[test_log::test(tokio::test)]
async fn test_unknown_ids_are_reported_not_raised() {
    let state = test_state();
    let repos = &state.conversations;
    let unknown = Uuid::new_v4();

    assert!(repos.conversations.find(unknown).await.is_none());
    assert!(repos
        .conversations
        .update(unknown, Some("ghost".to_string()))
        .await
        .is_none());
    assert!(repos.conversations.touch(unknown).await.is_none());
    assert!(!repos.conversations.delete(unknown).await);
    assert!(repos.messages.find(unknown).await.is_none());
    assert!(!repos.messages.delete(unknown).await);
    assert!(state.agents.find(unknown).await.is_none());
    assert!(state
        .agents
        .update(unknown, AgentUpdate::default())
        .await
        .is_none());
}

#[test_log::test(tokio::test)]
async fn test_seeded_agent_roster() {
    let state = test_state();

    let agents = state.agents.list().await;
    assert_eq!(agents.len(), 3);
    assert!(agents.iter().all(|agent| agent.is_active));

    for agent_type in [AgentType::Reasoning, AgentType::Search, AgentType::Creative] {
        assert_eq!(
            agents
                .iter()
                .filter(|agent| agent.agent_type == agent_type)
                .count(),
            1
        );
    }

    // All seeded agents are routable until one is deactivated
    assert_eq!(state.agents.list_active().await.len(), 3);

    let benched = agents[0].clone();
    state
        .agents
        .update(
            benched.id,
            AgentUpdate {
                is_active: Some(false),
                ..AgentUpdate::default()
            },
        )
        .await
        .unwrap();

    let active = state.agents.list_active().await;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|agent| agent.id != benched.id));
}

#[test_log::test(tokio::test)]
async fn test_states_are_isolated_instances() {
    let a = test_state();
    let b = test_state();

    a.conversations
        .conversations
        .create(Conversation::new("only in a").unwrap())
        .await;

    assert_eq!(a.conversations.conversations.list().await.len(), 1);
    assert!(b.conversations.conversations.list().await.is_empty());
}
