use responses_ox::{OpenAI, ReasoningConfig, ResponsesRequest, TextConfig};

/// Real request against the Responses API
/// Run with: `cargo test -p responses-ox --test live_api -- --ignored`
#[tokio::test]
#[ignore]
async fn test_real_responses_api_basic() {
    let api_key = std::env::var("OPENAI_API_KEY")
        .expect("OPENAI_API_KEY environment variable must be set for live tests");

    let request = ResponsesRequest::builder()
        .model("gpt-5-mini")
        .input("Reply with the single word: pong")
        .text(TextConfig::with_verbosity("low"))
        .reasoning(ReasoningConfig::with_effort("minimal"))
        .build();

    let response = OpenAI::new(api_key)
        .send_responses(&request)
        .await
        .expect("Failed to get response from OpenAI Responses API");

    assert_eq!(response.status.as_deref(), Some("completed"));
    let text = response.text().expect("Response should have text");
    assert!(text.to_lowercase().contains("pong"));
}
