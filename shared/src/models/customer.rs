//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer identity remembered per website
///
/// Persisted as `{"name", "phone", "dateOfBirth"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub name: String,
    pub phone: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
}

impl CustomerProfile {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}

/// Registration payload of `customer/register-user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(rename = "dateofBirth")]
    pub date_of_birth: String,
    #[serde(rename = "websiteProjectId")]
    pub website_project_id: String,
    #[serde(rename = "websiteId")]
    pub website_id: String,
}

impl RegisterCustomerRequest {
    pub fn new(profile: &CustomerProfile, website_id: &str) -> Self {
        Self {
            name: profile.name.clone(),
            mobile_number: profile.phone.clone(),
            date_of_birth: profile.date_of_birth.clone(),
            website_project_id: website_id.to_string(),
            website_id: website_id.to_string(),
        }
    }
}
