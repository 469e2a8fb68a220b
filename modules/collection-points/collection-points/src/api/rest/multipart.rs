//! Reading the registration form out of a `multipart/form-data` body.

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use ecoleta_errors::Problem;

use crate::domain::validation::PointForm;

const IMAGE_FIELD: &str = "image";

pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Bytes,
}

pub struct ReceivedForm {
    pub fields: PointForm,
    /// `None` when no non-empty `image` part was sent.
    pub image: Option<UploadedImage>,
}

/// Drain `multipart` into text fields plus the image part.
///
/// # Errors
/// A Problem with the multipart error's status (400, or 413 past the body limit).
pub async fn read_point_form(multipart: &mut Multipart) -> Result<ReceivedForm, Problem> {
    let mut fields = PointForm::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| multipart_problem(&e))? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.map_err(|e| multipart_problem(&e))?;
            if !bytes.is_empty() {
                image = Some(UploadedImage { file_name, bytes });
            }
        } else {
            let value = field.text().await.map_err(|e| multipart_problem(&e))?;
            if !fields.set(&name, value) {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    Ok(ReceivedForm { fields, image })
}

fn multipart_problem(e: &MultipartError) -> Problem {
    let status = e.status();
    Problem::new(
        status,
        status.canonical_reason().unwrap_or("Bad Request"),
        e.body_text(),
    )
    .with_code("INVALID_MULTIPART")
    .with_instance("/points")
}
