//! Tests for model-string parsing and the default endpoint table.

use pincer_model::{Family, Protocol, default_api_base, extract_protocol};

#[test]
fn bare_model_defaults_to_openai() {
    assert_eq!(extract_protocol("gpt-4o"), ("openai", "gpt-4o"));
    assert_eq!(
        extract_protocol("claude-sonnet-4.6"),
        ("openai", "claude-sonnet-4.6")
    );
}

#[test]
fn whitespace_is_trimmed() {
    assert_eq!(extract_protocol("  gpt-4o  "), ("openai", "gpt-4o"));
    assert_eq!(extract_protocol("\tollama/llama3\n"), ("ollama", "llama3"));
}

#[test]
fn empty_input() {
    assert_eq!(extract_protocol(""), ("openai", ""));
    assert_eq!(extract_protocol("   "), ("openai", ""));
}

#[test]
fn splits_on_first_slash_only() {
    assert_eq!(
        extract_protocol("anthropic/claude-sonnet-4.6"),
        ("anthropic", "claude-sonnet-4.6")
    );
    assert_eq!(
        extract_protocol("openrouter/meta-llama/llama-3-70b"),
        ("openrouter", "meta-llama/llama-3-70b")
    );
    assert_eq!(extract_protocol("a/b/c/d"), ("a", "b/c/d"));
}

#[test]
fn empty_parts_pass_through() {
    assert_eq!(extract_protocol("openai/"), ("openai", ""));
    assert_eq!(extract_protocol("/gpt-4o"), ("", "gpt-4o"));
}

#[test]
fn default_endpoint_table() {
    assert_eq!(
        default_api_base("gemini"),
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(default_api_base("ollama"), "http://localhost:11434/v1");
    assert_eq!(default_api_base("vllm"), "http://localhost:8000/v1");
    assert_eq!(default_api_base("mistral"), "https://api.mistral.ai/v1");
    assert_eq!(default_api_base("unknownproto"), "");
}

#[test]
fn only_anthropic_uses_the_messages_api() {
    for protocol in Protocol::ALL {
        let expected = if protocol == Protocol::Anthropic {
            Family::Anthropic
        } else {
            Family::Http
        };
        assert_eq!(protocol.family(), expected, "{protocol}");
    }
}

#[test]
fn only_ollama_is_keyless() {
    let keyless: Vec<_> = Protocol::ALL
        .into_iter()
        .filter(|p| !p.requires_credential())
        .collect();
    assert_eq!(keyless, vec![Protocol::Ollama]);
}

#[test]
fn unknown_tag_does_not_parse() {
    let err = "unknownproto".parse::<Protocol>().unwrap_err();
    assert_eq!(err.0, "unknownproto");
    assert_eq!(err.to_string(), "unknown protocol \"unknownproto\"");
}
