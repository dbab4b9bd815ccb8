use actix_multipart::{Multipart, MultipartError};
use futures::TryStreamExt;

use crate::portfolio::application::ports::incoming::use_cases::UploadedFile;

/// Reads the first part named `field_name`. At most `limit + 1` bytes are
/// buffered; reaching that sets `oversized` and stops reading. Other parts
/// are drained and ignored.
pub(crate) async fn read_file_field(
    mut payload: Multipart,
    field_name: &str,
    limit: usize,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(field_name) {
            while field.try_next().await?.is_some() {}
            continue;
        }

        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        let mut oversized = false;

        while let Some(chunk) = field.try_next().await? {
            if bytes.len() + chunk.len() > limit {
                let room = limit + 1 - bytes.len();
                bytes.extend_from_slice(&chunk[..room.min(chunk.len())]);
                oversized = true;
                break;
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadedFile {
            content_type,
            bytes,
            oversized,
        }));
    }

    Ok(None)
}
