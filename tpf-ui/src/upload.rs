//! Multipart capability layer
//!
//! Converts the posted multipart stream into the raw text-field values
//! plus one [`FileSelection`] per media group, before validation runs.
//! The validation schema never sees file payloads.

use crate::error::ApiError;
use crate::form::FormInput;
use axum::extract::multipart::{Field, Multipart};

/// One uploaded file with its metadata
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Tagged file-input state for one media group
#[derive(Debug, Clone, Default)]
pub enum FileSelection {
    /// Nothing selected
    #[default]
    None,
    /// Single-valued group: the one chosen file
    Single(UploadedFile),
    /// Multi-valued group: all chosen files in selection order
    Multiple(Vec<UploadedFile>),
}

impl FileSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, FileSelection::None)
    }

    /// Number of selected files
    pub fn count(&self) -> usize {
        match self {
            FileSelection::None => 0,
            FileSelection::Single(_) => 1,
            FileSelection::Multiple(files) => files.len(),
        }
    }
}

/// Text fields plus per-group file selections from one form POST
#[derive(Debug, Default)]
pub struct SubmissionParts {
    pub input: FormInput,
    pub photo: FileSelection,
    pub activities: FileSelection,
    pub awards: FileSelection,
    pub works: FileSelection,
}

/// Read the whole multipart stream into [`SubmissionParts`].
///
/// The profile photo group is single-valued: the first chosen file wins.
/// Multi-valued groups collect every chosen file in arrival order. A file
/// part with neither filename nor content (what browsers post for an
/// untouched file input) counts as no selection.
pub async fn read_submission(mut multipart: Multipart) -> Result<SubmissionParts, ApiError> {
    let mut parts = SubmissionParts::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "firstName" => parts.input.first_name = field.text().await?,
            "lastName" => parts.input.last_name = field.text().await?,
            "address" => parts.input.address = field.text().await?,
            "phone" => parts.input.phone = field.text().await?,
            "school" => parts.input.school = field.text().await?,
            "gpa" => parts.input.gpa = field.text().await?,
            "skills" => parts.input.skills = field.text().await?,
            "reason" => parts.input.reason = field.text().await?,
            "major" => parts.input.major = field.text().await?,
            "university" => parts.input.university = field.text().await?,
            "photo" => {
                if let Some(file) = read_file(field).await? {
                    if parts.photo.is_none() {
                        parts.photo = FileSelection::Single(file);
                    }
                }
            }
            "activities" => push_file(&mut parts.activities, field).await?,
            "awards" => push_file(&mut parts.awards, field).await?,
            "works" => push_file(&mut parts.works, field).await?,
            _ => {
                // Unknown field: drain and ignore
                let _ = field.bytes().await?;
            }
        }
    }

    Ok(parts)
}

async fn push_file(selection: &mut FileSelection, field: Field<'_>) -> Result<(), ApiError> {
    if let Some(file) = read_file(field).await? {
        match selection {
            FileSelection::Multiple(files) => files.push(file),
            _ => *selection = FileSelection::Multiple(vec![file]),
        }
    }
    Ok(())
}

async fn read_file(field: Field<'_>) -> Result<Option<UploadedFile>, ApiError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let bytes = field.bytes().await?.to_vec();

    if filename.is_empty() && bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedFile {
        filename,
        content_type,
        bytes,
    }))
}
