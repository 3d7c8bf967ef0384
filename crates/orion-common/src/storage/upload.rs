//! File naming and content-type checks done before touching storage

use chrono::{Datelike, Utc};

use super::{ObjectStorage, StorageError};
use crate::text::safe_clave;

/// Allowed for attachments and photographs
pub const EXTENSIONES_DOCUMENTOS: &[&str] = &["pdf", "jpg", "jpeg", "png"];

/// Allowed for appointment documents
pub const EXTENSIONES_NOMBRAMIENTOS: &[&str] = &["pdf", "jpg", "jpeg", "png", "docx"];

/// Every extension with a known content type
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("zip", "application/zip"),
];

const MAX_DESCRIPTION_LEN: usize = 64;

/// One file on its way to storage
#[derive(Debug, Clone)]
pub struct FileUpload {
    base_directory: String,
    allowed_extensions: &'static [&'static str],
    extension: Option<String>,
    content_type: Option<&'static str>,
    filename: Option<String>,
    url: Option<String>,
}

impl FileUpload {
    #[must_use]
    pub fn new(base_directory: impl Into<String>, allowed_extensions: &'static [&'static str]) -> Self {
        Self {
            base_directory: base_directory.into(),
            allowed_extensions,
            extension: None,
            content_type: None,
            filename: None,
            url: None,
        }
    }

    /// Check the extension of the uploaded name against the allow-list
    ///
    /// # Errors
    /// `UnknownExtension` when no content type is known for it,
    /// `NotAllowedExtension` when it is known but not allowed here
    pub fn set_content_type(&mut self, nombre: &str) -> Result<&'static str, StorageError> {
        let extension = nombre
            .rsplit_once('.')
            .map(|(_, ext)| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| StorageError::UnknownExtension(nombre.to_string()))?;

        let content_type = CONTENT_TYPES
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, ct)| *ct)
            .ok_or_else(|| StorageError::UnknownExtension(extension.clone()))?;

        if !self.allowed_extensions.contains(&extension.as_str()) {
            return Err(StorageError::NotAllowedExtension(extension));
        }

        self.extension = Some(extension);
        self.content_type = Some(content_type);
        Ok(content_type)
    }

    /// Build the object path `{base}/{yyyy}/{mm}/{dd}/{descripcion}-{hashed_id}.{ext}`
    ///
    /// # Errors
    /// `MissingConfiguration` without a base directory, `Unknown` when the
    /// content type was not set first
    pub fn set_filename(&mut self, hashed_id: &str, descripcion: &str) -> Result<&str, StorageError> {
        let base = self.base_directory.trim_matches('/');
        if base.is_empty() {
            return Err(StorageError::MissingConfiguration(
                "directorio base".to_string(),
            ));
        }
        let extension = self
            .extension
            .as_deref()
            .ok_or_else(|| StorageError::Unknown("content type not set".to_string()))?;

        let descripcion = safe_clave(descripcion, MAX_DESCRIPTION_LEN).to_lowercase();
        let prefix = if descripcion.is_empty() {
            String::new()
        } else {
            format!("{descripcion}-")
        };
        let hoy = Utc::now().date_naive();

        Ok(self.filename.insert(format!(
            "{base}/{:04}/{:02}/{:02}/{prefix}{hashed_id}.{extension}",
            hoy.year(),
            hoy.month(),
            hoy.day(),
        )))
    }

    /// Store the bytes and remember the resulting URL
    pub async fn upload(
        &mut self,
        storage: &dyn ObjectStorage,
        bytes: Vec<u8>,
    ) -> Result<&str, StorageError> {
        let (Some(filename), Some(content_type)) = (self.filename.as_deref(), self.content_type)
        else {
            return Err(StorageError::Unknown("filename not set".to_string()));
        };

        let url = storage.put(filename, content_type, bytes).await?;
        Ok(self.url.insert(url))
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
