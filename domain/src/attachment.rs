use tracing::{debug, info};
use shared::{AttachmentInfo, ContactFormConfig};
use thiserror::Error;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Why a chosen file was not staged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentRejection {
    #[error("You can only upload PDF, image, text, or Word files!")]
    UnsupportedType(String),
    #[error("File must be smaller than {}MB!", .max_bytes / BYTES_PER_MB)]
    TooLarge { size_bytes: u64, max_bytes: u64 },
    #[error("This form does not accept attachments")]
    NotAccepted,
    #[error("Attachments cannot be changed while the form is submitting or submitted")]
    FormBusy,
}

/// Check a file against the MIME allow-list, then the size ceiling
pub fn check_attachment(file: &AttachmentInfo, config: &ContactFormConfig) -> Result<(), AttachmentRejection> {
    let mime = file.mime_type.trim().to_ascii_lowercase();
    let type_allowed = config.allowed_mime_types.iter().any(|allowed| *allowed == mime)
        || config
            .allowed_mime_prefixes
            .iter()
            .any(|prefix| mime.starts_with(prefix.as_str()));

    if !type_allowed {
        return Err(AttachmentRejection::UnsupportedType(file.mime_type.clone()));
    }

    if file.size_bytes >= config.max_attachment_bytes {
        return Err(AttachmentRejection::TooLarge {
            size_bytes: file.size_bytes,
            max_bytes: config.max_attachment_bytes,
        });
    }

    Ok(())
}

/// Holds at most one file pending submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttachmentStaging {
    staged: Option<AttachmentInfo>,
}

impl AttachmentStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `file`, replacing any previously staged one.
    ///
    /// A rejected file leaves the current staging untouched.
    pub fn stage(&mut self, file: AttachmentInfo, config: &ContactFormConfig) -> Result<&AttachmentInfo, AttachmentRejection> {
        check_attachment(&file, config)?;

        if let Some(previous) = &self.staged {
            debug!("Replacing staged attachment '{}' with '{}'", previous.file_name, file.file_name);
        }
        info!("Staged attachment '{}' ({} bytes)", file.file_name, file.size_bytes);

        Ok(self.staged.insert(file))
    }

    pub fn remove(&mut self) -> Option<AttachmentInfo> {
        self.staged.take()
    }

    pub fn staged(&self) -> Option<&AttachmentInfo> {
        self.staged.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_none()
    }
}
