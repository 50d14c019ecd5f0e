//! Gemini client tests against a local mock server

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use roast_gateway::core::providers::{
        GeminiClient, GeminiConfig, GenerationClient, GenerationRequest, InlineImage,
        ProviderError,
    };
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1/models/gemini-2.5-flash:generateContent";

    fn client(server: &MockServer) -> GeminiClient {
        GeminiClient::new(GeminiConfig::new_google_ai("test-key").with_base_url(server.uri()))
            .unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            instruction: "Roast this face".to_string(),
            image: InlineImage {
                mime_type: "image/png".to_string(),
                data: vec![0x89, b'P', b'N', b'G'],
            },
        }
    }

    #[tokio::test]
    async fn test_sends_key_image_and_settings() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{
                    "parts": [
                        { "text": "Roast this face" },
                        { "inlineData": {
                            "mimeType": "image/png",
                            "data": BASE64.encode([0x89, b'P', b'N', b'G'])
                        } }
                    ]
                }],
                "generationConfig": { "topK": 40, "maxOutputTokens": 320 },
                "safetySettings": [
                    { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE" },
                    { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_LOW_AND_ABOVE" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "Hair with its own weather system" }] },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let output = client(&server).generate(&request()).await.unwrap();
        assert_eq!(output.text, "Hair with its own weather system\n");
        assert_eq!(output.finish_reason.as_deref(), Some("STOP"));
    }

    #[tokio::test]
    async fn test_invalid_argument_surfaces_status_and_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = client(&server).generate(&request()).await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::api_error(
                "gemini",
                400,
                Some("INVALID_ARGUMENT".to_string()),
                "API key not valid. Please pass a valid API key."
            )
        );
        assert_eq!(err.http_status(), 400);
    }

    #[tokio::test]
    async fn test_safety_block_yields_blank_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let output = client(&server).generate(&request()).await.unwrap();
        assert!(output.text.trim().is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server).generate(&request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "candidates": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = GeminiConfig::new_google_ai("test-key")
            .with_base_url(server.uri())
            .with_request_timeout(1);
        let err = GeminiClient::new(config)
            .unwrap()
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Timeout { .. }));
        assert_eq!(err.http_status(), 504);
    }

    #[tokio::test]
    async fn test_model_override_changes_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = GeminiConfig::new_google_ai("test-key")
            .with_base_url(server.uri())
            .with_model("gemini-2.0-flash");
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(client.model_name(), "gemini-2.0-flash");
        assert_eq!(client.generate(&request()).await.unwrap().text, "ok\n");
    }
}
