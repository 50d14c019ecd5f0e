//! `POST /api/roast` and `GET /health` through the actix test harness

#[cfg(test)]
mod tests {
    use crate::common::{JPEG_BYTES, MultipartBody, PNG_BYTES, ScriptedGenerator, test_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use roast_gateway::core::providers::ProviderError;
    use roast_gateway::server::{AppState, HttpServer};
    use serde_json::Value;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn state(dir: &TempDir, generator: Arc<ScriptedGenerator>) -> web::Data<AppState> {
        let mut config = test_config(dir.path());
        config.upload.max_file_mb = 1;
        config.moderation.additional_terms = vec!["bozo".to_string()];
        web::Data::new(AppState::new(config, generator).unwrap())
    }

    async fn post_roast(state: web::Data<AppState>, body: MultipartBody) -> (StatusCode, Value) {
        let app = test::init_service(HttpServer::create_app(state)).await;
        let (content_type, payload) = body.finish();
        let req = test::TestRequest::post()
            .uri("/api/roast")
            .insert_header(("content-type", content_type))
            .set_payload(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_roast_success() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying(
            "- Hair like a BOZO thunderstorm\n- Smile that outshines the sun\n",
        ));

        let (status, body) = post_roast(
            state(&dir, generator.clone()),
            MultipartBody::new()
                .file("photo", "me.png", "image/png", PNG_BYTES)
                .text("intensity", "spicy")
                .text("userContext", "  wearing a party hat  "),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["roast"],
            "• Hair like a **** thunderstorm.\n• Smile that outshines the sun"
        );
        assert_eq!(body["meta"]["intensity"], "spicy");
        assert_eq!(body["meta"]["model"], "scripted-model");
        assert_eq!(body["meta"]["version"], "v1");
        assert_eq!(body["meta"]["moderation"]["ok"], true);

        let file_name = body["meta"]["fileSavedAs"].as_str().unwrap();
        assert_eq!(file_name.len(), 24);
        assert!(file_name.ends_with(".png"));
        assert!(dir.path().join(file_name).exists());

        let prompt = body["meta"]["prompt"].as_str().unwrap();
        assert!(prompt.contains("zestier, fast-paced"));
        assert!(prompt.ends_with("User context (optional flavoring): wearing a party hat"));

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].instruction, prompt);
        assert_eq!(requests[0].image.mime_type, "image/png");
        assert_eq!(requests[0].image.data, PNG_BYTES);
    }

    #[actix_web::test]
    async fn test_regen_requires_previous_prompt() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying("Fresh angle"));
        let state = state(&dir, generator.clone());

        let (status, body) = post_roast(
            state.clone(),
            MultipartBody::new()
                .file("photo", "me.jpg", "image/jpeg", JPEG_BYTES)
                .text("intensity", "volcanic")
                .text("regen", "1"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["intensity"], "mild");
        assert!(!body["meta"]["prompt"].as_str().unwrap().contains("Regeneration"));

        let (status, body) = post_roast(
            state,
            MultipartBody::new()
                .file("photo", "me.jpg", "image/jpeg", JPEG_BYTES)
                .text("regen", "1")
                .text("previousPrompt", "earlier prompt"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body["meta"]["prompt"]
                .as_str()
                .unwrap()
                .contains("Regeneration: produce a variant")
        );
        assert!(body["meta"]["fileSavedAs"].as_str().unwrap().ends_with(".jpg"));
    }

    #[actix_web::test]
    async fn test_missing_photo() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying("unused"));

        let (status, body) = post_roast(
            state(&dir, generator.clone()),
            MultipartBody::new().text("intensity", "mild"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No image uploaded.");
        assert!(generator.requests().is_empty());
    }

    #[actix_web::test]
    async fn test_non_image_upload_rejected() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying("unused"));

        let (status, body) = post_roast(
            state(&dir, generator.clone()),
            MultipartBody::new().file("photo", "selfie.png", "image/png", b"just some text"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Unsupported file type: text/plain");
        assert!(generator.requests().is_empty());
    }

    #[actix_web::test]
    async fn test_oversize_upload_rejected() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying("unused"));
        let mut big = PNG_BYTES.to_vec();
        big.resize(1024 * 1024 + 1, 0);

        let (status, body) = post_roast(
            state(&dir, generator.clone()),
            MultipartBody::new().file("photo", "big.png", "image/png", &big),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["message"], "File too large (max 1MB).");
        assert!(generator.requests().is_empty());
    }

    #[actix_web::test]
    async fn test_blank_generation_is_unprocessable() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::replying("  \n"));

        let (status, body) = post_roast(
            state(&dir, generator),
            MultipartBody::new().file("photo", "me.png", "image/png", PNG_BYTES),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EMPTY_CONTENT");
        assert_eq!(
            body["error"]["message"],
            "No content returned (possibly safety blocked). Try mild intensity."
        );
    }

    #[actix_web::test]
    async fn test_upstream_error_is_bad_gateway() {
        let dir = TempDir::new().unwrap();
        let generator = Arc::new(ScriptedGenerator::failing(ProviderError::api_error(
            "gemini",
            400,
            Some("INVALID_ARGUMENT".to_string()),
            "API key not valid.",
        )));

        let (status, body) = post_roast(
            state(&dir, generator),
            MultipartBody::new().file("photo", "me.png", "image/png", PNG_BYTES),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["message"], "Gemini API error: API key not valid.");
        assert_eq!(body["error"]["upstream_status"], 400);
        assert_eq!(body["error"]["upstream_code"], "INVALID_ARGUMENT");
    }

    #[actix_web::test]
    async fn test_health() {
        let dir = TempDir::new().unwrap();
        let app = test::init_service(HttpServer::create_app(state(
            &dir,
            Arc::new(ScriptedGenerator::replying("unused")),
        )))
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model"], "scripted-model");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
