//! HTTP surface: the single page and the enhancement endpoint.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tokio_util::io::StreamReader;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::encoder::{self, SourceImage};
use crate::enhance::Enhancer;
use crate::error::{ApiError, ApiResult};
use crate::gemini::GenerateContent;
use crate::options::{parse_form_bool, BackgroundStyle, EnhancementOptions};
use crate::page;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub struct AppState<C> {
    enhancer: Arc<Enhancer<C>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            enhancer: Arc::clone(&self.enhancer),
        }
    }
}

impl<C> AppState<C> {
    pub fn new(enhancer: Enhancer<C>) -> Self {
        Self {
            enhancer: Arc::new(enhancer),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnhanceResponse {
    /// `data:<mime type>;base64,<data>`
    pub image: String,
    pub mime_type: String,
    pub model: String,
    pub processing_time_ms: u128,
}

/// Builds the application router around `enhancer`.
pub fn router<C>(enhancer: Enhancer<C>) -> Router
where
    C: GenerateContent + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/enhance", post(enhance_photo::<C>))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .with_state(AppState::new(enhancer))
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// Media type for an upload: the declared one if it is an image type,
/// otherwise whatever the bytes look like.
fn resolve_media_type(declared: Option<&str>, bytes: &[u8]) -> Option<String> {
    if let Some(declared) = declared.filter(|ct| ct.starts_with("image/")) {
        return Some(declared.to_string());
    }

    let format = image::guess_format(bytes).ok()?;
    let mime = match format {
        image::ImageFormat::Png => "image/png",
        image::ImageFormat::Jpeg => "image/jpeg",
        image::ImageFormat::WebP => "image/webp",
        image::ImageFormat::Gif => "image/gif",
        image::ImageFormat::Bmp => "image/bmp",
        image::ImageFormat::Tiff => "image/tiff",
        _ => return None,
    };
    Some(mime.to_string())
}

fn unreadable_upload(err: MultipartError) -> ApiError {
    tracing::error!(error = %err, "failed to read multipart upload");
    ApiError::InvalidUpload(ApiError::UNREADABLE_UPLOAD.into())
}

async fn enhance_photo<C>(
    State(state): State<AppState<C>>,
    mut multipart: Multipart,
) -> ApiResult<Json<EnhanceResponse>>
where
    C: GenerateContent + 'static,
{
    let start = Instant::now();
    let mut options = EnhancementOptions::default();
    let mut source: Option<SourceImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(unreadable_upload)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let declared = field.content_type().map(str::to_string);
                let reader =
                    StreamReader::new(field.map_err(|e| io::Error::new(io::ErrorKind::Other, e)));
                let upload =
                    SourceImage::read_from(reader, declared.clone().unwrap_or_default()).await?;

                let media_type = resolve_media_type(declared.as_deref(), upload.bytes())
                    .ok_or_else(|| ApiError::InvalidUpload(ApiError::NOT_AN_IMAGE.into()))?;
                source = Some(SourceImage::new(upload.into_bytes(), media_type));
            }
            "background_style" | "adjust_brightness" | "smooth_skin" => {
                let value = field.text().await.map_err(unreadable_upload)?;
                match name.as_str() {
                    "background_style" => {
                        options.background_style = BackgroundStyle::from_label(&value)
                    }
                    "adjust_brightness" => options.adjust_brightness = parse_form_bool(&value),
                    _ => options.smooth_skin = parse_form_bool(&value),
                }
            }
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }

    let source = source.ok_or_else(|| ApiError::InvalidUpload(ApiError::NO_IMAGE.into()))?;

    tracing::info!(
        media_type = source.media_type(),
        bytes = source.bytes().len(),
        background = options.background_style.label(),
        "enhancing photo"
    );

    let payload = encoder::encode(&source)?;
    let image = state.enhancer.enhance(&payload, &options).await?;

    Ok(Json(EnhanceResponse {
        image: image.data_url(),
        mime_type: image.mime_type,
        model: state.enhancer.model().to_string(),
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

/// Serves the router until the process is stopped.
pub async fn serve<C>(listener: tokio::net::TcpListener, enhancer: Enhancer<C>) -> std::io::Result<()>
where
    C: GenerateContent + 'static,
{
    axum::serve(listener, router(enhancer)).await
}
