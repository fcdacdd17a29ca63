//! Feedback Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enquiry the feedback form is filed under
pub const FEEDBACK_ENQUIRY_ID: &str = "68272ea9ff4b7ea66624ef2c";

/// Rating scale of the feedback form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Bad,
    Average,
    Good,
    Best,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Bad, Rating::Average, Rating::Good, Rating::Best];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Best => "Best",
        }
    }

    /// Case-insensitive lookup
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `feedback/create-feedback`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub website_project_id: String,
    pub website_id: String,
    pub name: String,
    pub mobile_number: String,
    pub remarks: String,
    pub strings: FeedbackRatings,
    pub arrays: FeedbackAttachments,
    pub enquiry_id: String,
    pub outlet_id: Option<String>,
}

/// Ratings in their wire slots
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRatings {
    /// Overall experience
    pub string_one: String,
    /// Food quality
    pub string_two: String,
    /// Staff service
    pub string_three: String,
    /// Cleanliness
    pub string_four: String,
}

/// Uploaded attachment names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackAttachments {
    pub array_one: Vec<String>,
}
