use crate::portfolio::application::domain::entities::AssetKind;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_image_size_bytes: usize,
    pub max_resume_size_bytes: usize,
    pub default_image_mime: &'static str,
    pub resume_mime: &'static str,
}

impl UploadPolicy {
    pub const DEFAULT_MAX_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_IMAGE_MIME: &'static str = "image/png";
    pub const RESUME_MIME: &'static str = "application/pdf";

    /// Limits can be lowered through `UPLOAD_MAX_IMAGE_BYTES` /
    /// `UPLOAD_MAX_RESUME_BYTES`; anything unparsable falls back to 5MB.
    pub fn from_env() -> Self {
        Self {
            max_image_size_bytes: read_limit("UPLOAD_MAX_IMAGE_BYTES"),
            max_resume_size_bytes: read_limit("UPLOAD_MAX_RESUME_BYTES"),
            ..Self::default()
        }
    }

    pub fn max_size_for(&self, kind: AssetKind) -> usize {
        match kind {
            AssetKind::Image => self.max_image_size_bytes,
            AssetKind::Resume => self.max_resume_size_bytes,
        }
    }

    /// Human-readable limit for error messages: whole MB when the limit is a
    /// multiple of a megabyte, otherwise KB, otherwise bytes.
    pub fn size_limit_label(&self, kind: AssetKind) -> String {
        const KB: usize = 1024;
        const MB: usize = 1024 * KB;

        match self.max_size_for(kind) {
            n if n >= MB && n % MB == 0 => format!("{}MB", n / MB),
            n if n >= KB && n % KB == 0 => format!("{}KB", n / KB),
            n => format!("{n} bytes"),
        }
    }

    pub fn accepts(&self, kind: AssetKind, mime: &str) -> bool {
        match kind {
            AssetKind::Image => mime.starts_with("image/"),
            AssetKind::Resume => mime == self.resume_mime,
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_image_size_bytes: Self::DEFAULT_MAX_SIZE_BYTES,
            max_resume_size_bytes: Self::DEFAULT_MAX_SIZE_BYTES,
            default_image_mime: Self::DEFAULT_IMAGE_MIME,
            resume_mime: Self::RESUME_MIME,
        }
    }
}

fn read_limit(var: &str) -> usize {
    std::env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(UploadPolicy::DEFAULT_MAX_SIZE_BYTES)
}
