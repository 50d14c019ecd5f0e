//! Roast endpoint
//!
//! Accepts a multipart photo upload, asks the generation service for a
//! roast, and returns the post-processed text with request metadata.

use crate::core::providers::{GenerationRequest, InlineImage};
use crate::core::roast::Intensity;
use crate::core::security::ModerationResult;
use crate::server::state::AppState;
use crate::storage::{NO_IMAGE_MESSAGE, PhotoStore};
use crate::utils::error::{GatewayError, Result};
use crate::utils::generate_request_id;
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use serde::Serialize;
use tracing::{debug, error, info, warn};

/// Upper bound for a single text field
const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

/// Successful roast body
#[derive(Debug, Clone, Serialize)]
pub struct RoastResponse {
    /// Display-ready roast text
    pub roast: String,
    pub meta: RoastMeta,
}

/// Metadata echoed back to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastMeta {
    /// Instruction sent to the model; clients send it back as `previousPrompt`
    pub prompt: String,
    /// Stored file name
    pub file_saved_as: String,
    pub intensity: Intensity,
    pub model: String,
    pub version: String,
    pub moderation: ModerationResult,
}

/// Parsed multipart form
#[derive(Debug, Default)]
struct RoastForm {
    photo: Option<Vec<u8>>,
    intensity: String,
    user_context: String,
    previous_prompt: String,
    regen: bool,
}

impl RoastForm {
    async fn read(payload: &mut Multipart, photos: &PhotoStore) -> Result<Self> {
        let mut form = Self::default();

        while let Some(item) = payload.next().await {
            let mut field = item?;

            let field_name = match field.name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            match field_name.as_str() {
                "photo" => {
                    let mut data = Vec::new();
                    while let Some(chunk) = field.next().await {
                        data.extend_from_slice(&chunk?);
                        // Stop reading as soon as the cap is crossed
                        photos.check_size(data.len())?;
                    }
                    form.photo = Some(data);
                }
                "intensity" => form.intensity = read_text(&mut field).await?,
                "userContext" => form.user_context = read_text(&mut field).await?,
                "previousPrompt" => form.previous_prompt = read_text(&mut field).await?,
                "regen" => {
                    // Presence alone marks a regeneration
                    drain(&mut field).await?;
                    form.regen = true;
                }
                _ => drain(&mut field).await?,
            }
        }

        Ok(form)
    }
}

async fn read_text(field: &mut Field) -> Result<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
        if bytes.len() > MAX_TEXT_FIELD_BYTES {
            return Err(GatewayError::bad_request(format!(
                "Field '{}' is too long",
                field.name().unwrap_or_default()
            )));
        }
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn drain(field: &mut Field) -> Result<()> {
    while let Some(chunk) = field.next().await {
        chunk?;
    }
    Ok(())
}

/// `POST /api/roast`
pub async fn create_roast(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let request_id = generate_request_id();
    debug!(request_id = %request_id, "Roast request");

    let form = RoastForm::read(&mut payload, &state.photos).await?;

    let photo = form
        .photo
        .filter(|data| !data.is_empty())
        .ok_or_else(|| GatewayError::validation(NO_IMAGE_MESSAGE))?;
    let format = state.photos.validate(&photo)?;
    let stored = state.photos.save(&photo, format).await?;

    let intensity = Intensity::from_label(&form.intensity);
    let prompt = state.prompts.build(
        intensity,
        &form.user_context,
        form.regen,
        &form.previous_prompt,
    );

    let request = GenerationRequest {
        instruction: prompt.clone(),
        image: InlineImage {
            mime_type: format.mime_type().to_string(),
            data: photo,
        },
    };

    let output = state.client.generate(&request).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Generation failed");
        e
    })?;

    let processed = state.processor.process(&output.text).map_err(|e| {
        warn!(
            request_id = %request_id,
            finish_reason = ?output.finish_reason,
            "Generation returned no text"
        );
        e
    })?;

    info!(
        request_id = %request_id,
        model = state.client.model_name(),
        intensity = %intensity,
        file = %stored.file_name,
        regen = form.regen,
        "Roast generated"
    );

    Ok(HttpResponse::Ok().json(RoastResponse {
        roast: processed.final_text,
        meta: RoastMeta {
            prompt,
            file_saved_as: stored.file_name,
            intensity,
            model: state.client.model_name().to_string(),
            version: state.client.api_version().to_string(),
            moderation: processed.moderation,
        },
    }))
}
