//! `multipart/form-data` encoding of image uploads.

use super::ImageFile;

/// A multipart body under construction.
#[derive(Debug)]
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    /// Start an empty form with a random boundary.
    pub fn new() -> Self {
        Self::with_boundary(format!("wastelens-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Start an empty form with a fixed boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            body: Vec::new(),
        }
    }

    /// Append a file part under `field`.
    pub fn add_file(&mut self, field: &str, file: &ImageFile) -> &mut Self {
        let header = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{name}\"\r\nContent-Type: {content_type}\r\n\r\n",
            boundary = self.boundary,
            field = escape_quoted(field),
            name = escape_quoted(&file.file_name),
            content_type = file.content_type,
        );
        self.body.extend_from_slice(header.as_bytes());
        self.body.extend_from_slice(&file.bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// `Content-Type` header value announcing the boundary.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Close the form and return `(content_type, body)`.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        let closing = format!("--{}--\r\n", self.boundary);
        self.body.extend_from_slice(closing.as_bytes());
        (self.content_type(), self.body)
    }
}

fn escape_quoted(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch {
            '"' => "%22".to_string(),
            '\r' => "%0D".to_string(),
            '\n' => "%0A".to_string(),
            other => other.to_string(),
        })
        .collect()
}
