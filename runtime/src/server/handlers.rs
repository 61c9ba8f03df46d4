//! Request handlers.

use super::AppState;
use crate::error::{InputError, RenderError};
use crate::extraction::InputSource;
use crate::render::{render, RenderFormat, RenderedFile};
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

/// JSON body of `POST /summarize`.
///
/// When several fields are present the first of `documentUrl`, `text`,
/// `webpageUrl` wins.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(alias = "pdfUrl")]
    pub document_url: Option<String>,
    pub text: Option<String>,
    pub webpage_url: Option<String>,
}

impl SummarizeRequest {
    /// The selected input source, if any field is populated.
    pub fn into_source(self) -> Option<InputSource> {
        if let Some(url) = self.document_url {
            Some(InputSource::RemoteDocumentUrl(url))
        } else if let Some(text) = self.text {
            Some(InputSource::InlineText(text))
        } else {
            self.webpage_url.map(InputSource::WebPageUrl)
        }
    }
}

/// JSON body of the download routes.
#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub text: String,
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        error!("render failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

/// `POST /summarize`
pub async fn summarize(State(state): State<AppState>, request: Request) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("summarize", %request_id);

    async move {
        let source = match read_source(request).await {
            Ok(source) => source,
            Err(rejection) => return rejection,
        };
        match state.pipeline.run(source).await {
            Ok(summary) => Json(summary).into_response(),
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}

/// Pick the input source out of a multipart or JSON request.
///
/// Bodies that are neither count as "no input". Transport-level rejections
/// (oversized bodies, broken multipart framing) are returned as responses.
async fn read_source(request: Request) -> Result<Option<InputSource>, Response> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(IntoResponse::into_response)?;
        return read_upload(multipart).await;
    }

    match Json::<SummarizeRequest>::from_request(request, &()).await {
        Ok(Json(body)) => Ok(body.into_source()),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(rejection.into_response())
        }
        Err(rejection) => {
            debug!("request body is not a summarize request: {rejection}");
            Ok(None)
        }
    }
}

async fn read_upload(mut multipart: Multipart) -> Result<Option<InputSource>, Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(IntoResponse::into_response)?
    {
        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if !is_pdf_filename(&filename) {
            warn!(filename = %filename, "rejecting upload with unsupported type");
            return Ok(None);
        }

        let bytes = field.bytes().await.map_err(IntoResponse::into_response)?;
        return Ok(Some(InputSource::FileBytes {
            bytes: bytes.to_vec(),
            filename,
        }));
    }
    Ok(None)
}

/// Whether an upload name carries the `.pdf` extension (any case).
pub fn is_pdf_filename(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
}

/// `POST /download/txt`
pub async fn download_txt(Json(body): Json<RenderRequest>) -> Response {
    file_response(render(&body.text, RenderFormat::Text))
}

/// `POST /download/pdf`
pub async fn download_pdf(Json(body): Json<RenderRequest>) -> Response {
    file_response(render(&body.text, RenderFormat::Pdf))
}

fn file_response(result: Result<RenderedFile, RenderError>) -> Response {
    match result {
        Ok(file) => (
            [
                (header::CONTENT_TYPE, file.content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.filename),
                ),
            ],
            file.bytes,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_priority() {
        let req = SummarizeRequest {
            document_url: Some("https://example.com/a.pdf".into()),
            text: Some("inline".into()),
            webpage_url: Some("https://example.com".into()),
        };
        assert_eq!(
            req.into_source(),
            Some(InputSource::RemoteDocumentUrl("https://example.com/a.pdf".into()))
        );

        let req = SummarizeRequest {
            text: Some("inline".into()),
            webpage_url: Some("https://example.com".into()),
            ..Default::default()
        };
        assert_eq!(req.into_source(), Some(InputSource::InlineText("inline".into())));

        assert_eq!(SummarizeRequest::default().into_source(), None);
    }

    #[test]
    fn test_request_field_names() {
        let req: SummarizeRequest =
            serde_json::from_str(r#"{"pdfUrl": "https://example.com/x.pdf"}"#).unwrap();
        assert_eq!(req.document_url.as_deref(), Some("https://example.com/x.pdf"));

        let req: SummarizeRequest =
            serde_json::from_str(r#"{"webpageUrl": "https://example.com"}"#).unwrap();
        assert_eq!(
            req.into_source(),
            Some(InputSource::WebPageUrl("https://example.com".into()))
        );

        let req: SummarizeRequest = serde_json::from_str(r#"{"unrelated": 1}"#).unwrap();
        assert_eq!(req.into_source(), None);
    }

    #[test]
    fn test_pdf_filename_check() {
        assert!(is_pdf_filename("report.pdf"));
        assert!(is_pdf_filename("Report.Final.PDF"));
        assert!(!is_pdf_filename("report.docx"));
        assert!(!is_pdf_filename("pdf"));
        assert!(!is_pdf_filename(".pdf"));
        assert!(!is_pdf_filename("report.pdf.exe"));
    }
}
