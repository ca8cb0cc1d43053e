//! One-shot photo enhancement against the image service.

use crate::encoder::EncodedPayload;
use crate::error::{EnhanceError, TransportError};
use crate::gemini::{GenerateContent, GenerateContentRequest, GenerateContentResponse, InlineData};
use crate::options::EnhancementOptions;
use crate::prompt;

/// Enhanced image returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedImage {
    pub mime_type: String,
    pub data: String,
}

impl EnhancedImage {
    /// `data:<mime type>;base64,<data>`, ready for an `<img src>` or a download link.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

impl From<InlineData> for EnhancedImage {
    fn from(inline: InlineData) -> Self {
        Self {
            mime_type: inline.mime_type,
            data: inline.data,
        }
    }
}

/// Sends photos to the image service and classifies what comes back.
///
/// Holds no per-request state; every call to [`Enhancer::enhance`] is
/// independent and performs exactly one request.
#[derive(Debug)]
pub struct Enhancer<C> {
    client: C,
}

impl<C: GenerateContent> Enhancer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub async fn enhance(
        &self,
        payload: &EncodedPayload,
        options: &EnhancementOptions,
    ) -> Result<EnhancedImage, EnhanceError> {
        let instruction = prompt::build_instruction(options);
        let request =
            GenerateContentRequest::image_edit(payload.media_type(), payload.data(), instruction);

        tracing::debug!(
            model = self.client.model(),
            media_type = payload.media_type(),
            background = options.background_style.label(),
            adjust_brightness = options.adjust_brightness,
            smooth_skin = options.smooth_skin,
            "sending enhancement request"
        );

        let response = self.client.generate_content(&request).await.map_err(|e| {
            tracing::error!(error = %e, "error enhancing image with Gemini API");
            classify_transport_error(&e)
        })?;

        let image = extract_image(response).map_err(|e| {
            tracing::error!(error = %e, "error enhancing image with Gemini API");
            e
        })?;

        tracing::info!(mime_type = %image.mime_type, bytes = image.data.len(), "enhanced image received");
        Ok(image)
    }
}

/// Maps a raw transport failure to its user-facing kind.
pub fn classify_transport_error(err: &TransportError) -> EnhanceError {
    if err.to_string().contains("API key") {
        EnhanceError::InvalidCredential
    } else {
        EnhanceError::GenericServiceFailure
    }
}

/// Returns the first inline image of the first candidate.
pub fn extract_image(response: GenerateContentResponse) -> Result<EnhancedImage, EnhanceError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(EnhanceError::NoCandidates)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        tracing::debug!(finish_reason = reason, "candidate finished");
    }

    candidate
        .content
        .into_iter()
        .flat_map(|content| content.parts)
        .find_map(|part| part.inline_data)
        .map(EnhancedImage::from)
        .ok_or(EnhanceError::NoImageInResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode, SourceImage};
    use crate::gemini::{Candidate, CandidateContent, ResponsePart};
    use crate::options::BackgroundStyle;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Response(GenerateContentResponse),
        Status(u16, &'static str),
    }

    struct FakeService {
        reply: Reply,
        seen: Mutex<Vec<GenerateContentRequest>>,
    }

    impl FakeService {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl GenerateContent for FakeService {
        async fn generate_content(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, TransportError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Reply::Response(resp) => Ok(resp.clone()),
                Reply::Status(status, message) => Err(TransportError::Status {
                    status: *status,
                    message: message.to_string(),
                }),
            }
        }

        fn model(&self) -> &str {
            "fake-model"
        }
    }

    fn image_part(mime_type: &str, data: &str) -> ResponsePart {
        ResponsePart {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }

    fn text_part(text: &str) -> ResponsePart {
        ResponsePart {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn response_with(parts: Vec<ResponsePart>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent { parts }),
                finish_reason: Some("STOP".into()),
            }],
        }
    }

    fn payload() -> EncodedPayload {
        encode(&SourceImage::new(b"fake jpeg".to_vec(), "image/jpeg")).unwrap()
    }

    async fn run(reply: Reply) -> Result<EnhancedImage, EnhanceError> {
        let enhancer = Enhancer::new(FakeService::new(reply));
        enhancer
            .enhance(&payload(), &EnhancementOptions::default())
            .await
    }

    #[tokio::test]
    async fn test_image_part_becomes_data_url() {
        let image = run(Reply::Response(response_with(vec![
            text_part("Done."),
            image_part("image/png", "ABC123"),
        ])))
        .await
        .unwrap();
        assert_eq!(image.data_url(), "data:image/png;base64,ABC123");
    }

    #[tokio::test]
    async fn test_first_image_part_wins() {
        let image = run(Reply::Response(response_with(vec![
            image_part("image/png", "FIRST"),
            image_part("image/jpeg", "SECOND"),
        ])))
        .await
        .unwrap();
        assert_eq!(image.data_url(), "data:image/png;base64,FIRST");
    }

    #[tokio::test]
    async fn test_only_first_candidate_is_scanned() {
        let mut response = response_with(vec![text_part("sorry")]);
        response.candidates.push(Candidate {
            content: Some(CandidateContent {
                parts: vec![image_part("image/png", "LATER")],
            }),
            finish_reason: None,
        });
        assert_eq!(
            run(Reply::Response(response)).await,
            Err(EnhanceError::NoImageInResponse)
        );
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let result = run(Reply::Response(GenerateContentResponse::default())).await;
        assert_eq!(result, Err(EnhanceError::NoCandidates));
    }

    #[tokio::test]
    async fn test_no_image_in_parts() {
        let result = run(Reply::Response(response_with(vec![text_part("I can't edit this.")]))).await;
        assert_eq!(result, Err(EnhanceError::NoImageInResponse));
    }

    #[tokio::test]
    async fn test_candidate_without_content() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("IMAGE_SAFETY".into()),
            }],
        };
        assert_eq!(
            run(Reply::Response(response)).await,
            Err(EnhanceError::NoImageInResponse)
        );
    }

    #[tokio::test]
    async fn test_api_key_error_is_invalid_credential() {
        let result = run(Reply::Status(
            400,
            "API key not valid. Please pass a valid API key.",
        ))
        .await;
        assert_eq!(result, Err(EnhanceError::InvalidCredential));
    }

    #[tokio::test]
    async fn test_other_transport_error_is_generic() {
        let result = run(Reply::Status(503, "The model is overloaded.")).await;
        assert_eq!(result, Err(EnhanceError::GenericServiceFailure));
    }

    #[test]
    fn test_missing_key_classified_as_credential_error() {
        assert_eq!(
            classify_transport_error(&TransportError::MissingApiKey),
            EnhanceError::InvalidCredential
        );
    }

    #[tokio::test]
    async fn test_request_carries_image_and_instruction() {
        let enhancer = Enhancer::new(FakeService::new(Reply::Response(response_with(vec![
            image_part("image/png", "OK"),
        ]))));
        let options = EnhancementOptions::default()
            .with_background_style(BackgroundStyle::Office)
            .with_adjust_brightness(false);
        let payload = payload();

        enhancer.enhance(&payload, &options).await.unwrap();
        enhancer.enhance(&payload, &options).await.unwrap();

        let seen = enhancer.client().seen.lock().unwrap();
        assert_eq!(seen.len(), 2);

        let json = serde_json::to_value(&seen[0]).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], payload.data());
        assert_eq!(parts[1]["text"], prompt::build_instruction(&options));
        assert_eq!(
            json["generationConfig"]["responseModalities"],
            serde_json::json!(["IMAGE", "TEXT"])
        );
        assert_eq!(json, serde_json::to_value(&seen[1]).unwrap());
    }
}
