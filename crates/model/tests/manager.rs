//! Tests for `ProviderManager`.

use pincer_model::{
    ModelConfig, ModelList, ProviderManager,
    llm::{LLM, Message, Request},
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_list() -> ModelList {
    ModelList {
        models: vec![
            ModelConfig {
                model_name: Some("local".into()),
                ..ModelConfig::new("ollama/llama3")
            },
            ModelConfig::new("openai/gpt-4o").api_key("key2"),
        ],
    }
}

#[test]
fn first_config_is_active() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    assert_eq!(manager.active_name().as_str(), "local");
    assert_eq!(manager.active_model_id().as_str(), "llama3");
    assert_eq!(manager.active().api_base(), "http://localhost:11434/v1");
}

#[test]
fn switch_and_active_config() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    manager.switch("openai/gpt-4o").unwrap();
    assert_eq!(manager.active_model_id().as_str(), "gpt-4o");
    assert_eq!(manager.active_config().model, "openai/gpt-4o");
}

#[test]
fn switch_unknown_errors() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    assert!(manager.switch("nope").is_err());
    assert_eq!(manager.active_name().as_str(), "local");
}

#[test]
fn invalid_entries_are_skipped() {
    let list = ModelList {
        models: vec![
            ModelConfig::new("vllm/x"),
            ModelConfig::new("unknownproto/x").api_key("k"),
            ModelConfig::new("mistral/mistral-small").api_key("k"),
        ],
    };
    let manager = ProviderManager::from_list(&list).unwrap();
    let entries = manager.list();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name.as_str(), "mistral/mistral-small");
    assert!(entries[0].active);
}

#[test]
fn no_resolvable_entries_errors() {
    let list = ModelList {
        models: vec![ModelConfig::new("vllm/x")],
    };
    assert!(ProviderManager::from_list(&list).is_err());
    assert!(ProviderManager::from_list(&ModelList::default()).is_err());
}

#[test]
fn add_and_get() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    let third = ModelConfig::new("anthropic/claude-sonnet-4-6").api_key("key3");
    manager.add(&third).unwrap();

    let (provider, model_id) = manager.get("anthropic/claude-sonnet-4-6").unwrap();
    assert_eq!(model_id.as_str(), "claude-sonnet-4-6");
    assert_eq!(provider.api_base(), "https://api.anthropic.com/v1");
    assert_eq!(manager.list().len(), 3);
}

#[test]
fn add_invalid_config_errors() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    let err = manager.add(&ModelConfig::new("vllm/x")).unwrap_err();
    assert!(err.to_string().contains("vllm"));
    assert_eq!(manager.list().len(), 2);
}

#[test]
fn remove_rules() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    assert!(manager.remove("local").is_err(), "active entry is protected");
    assert!(manager.remove("nope").is_err());
    manager.remove("openai/gpt-4o").unwrap();
    assert_eq!(manager.list().len(), 1);
}

#[test]
fn clones_share_state() {
    let manager = ProviderManager::from_list(&test_list()).unwrap();
    let clone = manager.clone();
    clone.switch("openai/gpt-4o").unwrap();
    assert_eq!(manager.active_name().as_str(), "openai/gpt-4o");
}

#[tokio::test]
async fn send_fills_in_model_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({ "model": "llama3" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1,
            "model": "llama3",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "pong" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let list = ModelList {
        models: vec![
            ModelConfig::new("ollama/llama3").api_base(format!("{}/v1", server.uri())),
        ],
    };
    let manager = ProviderManager::from_list(&list).unwrap();
    let request = Request::default().message(Message::user("ping"));
    let response = manager.send(&request).await.unwrap();
    assert_eq!(response.content().map(String::as_str), Some("pong"));
}
