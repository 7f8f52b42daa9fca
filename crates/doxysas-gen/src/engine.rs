use serde::{Deserialize, Serialize};

use doxysas_core::ApiSettings;

const ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// One chat-completion round trip. Any non-success status is a hard failure
/// carrying the status code and response body.
pub async fn generate(
    settings: &ApiSettings,
    system: &str,
    user_msg: &str,
) -> Result<String, String> {
    let body = ChatRequest {
        model: &settings.model,
        messages: vec![
            ChatMessage { role: "system", content: system },
            ChatMessage { role: "user", content: user_msg },
        ],
    };

    let client = reqwest::Client::new();
    let response = client
        .post(ENDPOINT)
        .bearer_auth(&settings.api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| format!("request: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("API error {}: {}", status.as_u16(), text));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("decode response: {e}"))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err("model returned empty text".to_string());
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let body = ChatRequest {
            model: "nvidia/llama-3.1-nemotron-ultra-253b-v1:free",
            messages: vec![
                ChatMessage { role: "system", content: "sys" },
                ChatMessage { role: "user", content: "usr" },
            ],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "nvidia/llama-3.1-nemotron-ultra-253b-v1:free");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "sys");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn response_yields_first_choice_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"/** @file x.sas */"}},{"message":{"content":"second"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content, "/** @file x.sas */");
    }

    #[test]
    fn empty_choices_parse_to_none() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.into_iter().next().is_none());
    }
}
