//! Feedback form

use crate::{ClientError, ClientResult};
use shared::models::{
    CustomerProfile, FEEDBACK_ENQUIRY_ID, FeedbackAttachments, FeedbackRatings, FeedbackRequest,
    Rating,
};
use std::path::Path;
use tracing::warn;

/// Largest file accepted as an attachment (5 MB)
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// A file picked for upload with the feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Read a file from disk, refusing it when over [`MAX_ATTACHMENT_BYTES`]
    ///
    /// The size is checked before any content is read.
    pub async fn read(path: &Path) -> ClientResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());

        let size = tokio::fs::metadata(path).await?.len();
        if size > MAX_ATTACHMENT_BYTES {
            return Err(ClientError::Validation(format!(
                "File {} exceeds 5MB limit",
                file_name
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self { file_name, bytes })
    }
}

/// Read attachments, skipping files that are too large or unreadable
pub async fn read_attachments<P: AsRef<Path>>(paths: &[P]) -> Vec<Attachment> {
    let mut attachments = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match Attachment::read(path).await {
            Ok(attachment) => attachments.push(attachment),
            Err(e) => warn!(path = %path.display(), error = %e, "Attachment skipped"),
        }
    }
    attachments
}

/// Feedback as filled in by the customer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub overall_experience: Option<Rating>,
    pub food_quality: Option<Rating>,
    pub staff_service: Option<Rating>,
    pub cleanliness: Option<Rating>,
    pub remarks: String,
    /// Stored names of already uploaded attachments
    pub uploaded_file_names: Vec<String>,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the wire request for a known customer
    ///
    /// Only the overall experience is required; unrated sections are sent as
    /// empty strings.
    pub fn into_request(
        self,
        website_id: &str,
        outlet_id: Option<&str>,
        customer: &CustomerProfile,
    ) -> ClientResult<FeedbackRequest> {
        let Some(overall) = self.overall_experience else {
            return Err(ClientError::Validation(
                "Please rate your overall experience".into(),
            ));
        };
        let rating = |r: Option<Rating>| r.map(|r| r.to_string()).unwrap_or_default();

        Ok(FeedbackRequest {
            website_project_id: website_id.to_string(),
            website_id: website_id.to_string(),
            name: customer.name.clone(),
            mobile_number: customer.phone.clone(),
            remarks: self.remarks,
            strings: FeedbackRatings {
                string_one: overall.to_string(),
                string_two: rating(self.food_quality),
                string_three: rating(self.staff_service),
                string_four: rating(self.cleanliness),
            },
            arrays: FeedbackAttachments {
                array_one: self.uploaded_file_names,
            },
            enquiry_id: FEEDBACK_ENQUIRY_ID.to_string(),
            outlet_id: outlet_id.map(str::to_string),
        })
    }
}
