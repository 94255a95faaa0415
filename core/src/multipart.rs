//! Multipart form bodies for file-upload operations.
//!
//! A `MultipartForm` is an ordered list of named parts. The form stays plain
//! data until a transport calls [`MultipartForm::encode`] with a boundary, so
//! built requests can be compared part by part in tests.

use uuid::Uuid;

/// A file supplied by the caller for upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileUpload {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl FileUpload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// One named part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl FormPart {
    /// Part content as UTF-8 text, if it is valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    pub parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary part carrying raw bytes. Falls back to `default_content_type`
    /// when the upload does not name one.
    pub fn file(mut self, name: &str, upload: &FileUpload, default_content_type: &str) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            filename: Some(upload.filename.clone().unwrap_or_else(|| name.to_string())),
            content_type: Some(
                upload
                    .content_type
                    .clone()
                    .unwrap_or_else(|| default_content_type.to_string()),
            ),
            data: upload.data.clone(),
        });
        self
    }

    /// Binary part, only when `upload` is present.
    pub fn file_opt(self, name: &str, upload: Option<&FileUpload>, default_content_type: &str) -> Self {
        match upload {
            Some(upload) => self.file(name, upload, default_content_type),
            None => self,
        }
    }

    /// Text part with no explicit content type (JSON metadata parts).
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            filename: None,
            content_type: None,
            data: value.into().into_bytes(),
        });
        self
    }

    /// Text part, only when `value` is present.
    pub fn text_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    pub fn part(&self, name: &str) -> Option<&FormPart> {
        self.parts.iter().find(|part| part.name == name)
    }

    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// `Content-Type` header value for a body encoded with `boundary`.
    pub fn content_type(boundary: &str) -> String {
        format!("multipart/form-data; boundary={boundary}")
    }

    /// Encode as `multipart/form-data` using `boundary`.
    pub fn encode(&self, boundary: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for part in &self.parts {
            out.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", quoted(&part.name));
            if let Some(filename) = &part.filename {
                disposition.push_str(&format!("; filename=\"{}\"", quoted(filename)));
            }
            out.extend_from_slice(disposition.as_bytes());
            out.extend_from_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                out.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            out.extend_from_slice(b"\r\n");
            out.extend_from_slice(&part.data);
            out.extend_from_slice(b"\r\n");
        }
        out.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
        out
    }
}

/// Percent-encode the characters that would end a quoted header parameter
/// or the header line itself.
fn quoted(value: &str) -> String {
    value.replace('"', "%22").replace('\r', "%0D").replace('\n', "%0A")
}

/// Fresh random boundary string.
pub fn boundary() -> String {
    format!("discovery-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_parts_are_skipped() {
        let form = MultipartForm::new()
            .file_opt("file", None, "application/octet-stream")
            .text_opt("metadata", None);
        assert!(form.is_empty());
    }

    #[test]
    fn file_part_defaults_filename_and_content_type() {
        let form = MultipartForm::new().file("file", &FileUpload::new(b"abc".to_vec()), "application/octet-stream");
        let part = form.part("file").unwrap();
        assert_eq!(part.filename.as_deref(), Some("file"));
        assert_eq!(part.content_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(part.data, b"abc");
    }

    #[test]
    fn file_part_keeps_caller_values() {
        let upload = FileUpload::new("a,b\n".as_bytes())
            .with_filename("train.csv")
            .with_content_type("text/csv");
        let form = MultipartForm::new().file("training_data", &upload, "application/octet-stream");
        let part = form.part("training_data").unwrap();
        assert_eq!(part.filename.as_deref(), Some("train.csv"));
        assert_eq!(part.content_type.as_deref(), Some("text/csv"));
    }

    #[test]
    fn text_part_has_no_content_type() {
        let form = MultipartForm::new().text("metadata", r#"{"a":1}"#);
        let part = form.part("metadata").unwrap();
        assert!(part.content_type.is_none());
        assert!(part.filename.is_none());
        assert_eq!(part.text(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn encode_produces_form_data() {
        let form = MultipartForm::new()
            .file("file", &FileUpload::new("hello").with_filename("a.txt").with_content_type("text/plain"), "")
            .text("metadata", "{}");
        let encoded = String::from_utf8(form.encode("XYZ")).unwrap();
        let expected = "--XYZ\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"a.txt\"\r\n\
             Content-Type: text/plain\r\n\
             \r\n\
             hello\r\n\
             --XYZ\r\n\
             Content-Disposition: form-data; name=\"metadata\"\r\n\
             \r\n\
             {}\r\n\
             --XYZ--\r\n";
        assert_eq!(encoded, expected);
        assert_eq!(MultipartForm::content_type("XYZ"), "multipart/form-data; boundary=XYZ");

        let upload = FileUpload::new("x").with_filename("evil\"\r\nX-Injected: 1.txt");
        let form = MultipartForm::new().file("file", &upload, "text/plain");
        let encoded = String::from_utf8(form.encode("XYZ")).unwrap();
        assert!(encoded.contains("filename=\"evil%22%0D%0AX-Injected: 1.txt\"\r\n"));
        assert_eq!(encoded.matches("\r\n").count(), 6);
    }

    #[test]
    fn boundaries_are_unique() {
        assert_ne!(boundary(), boundary());
    }
}
