//! Website Model

use serde::{Deserialize, Serialize};

/// Website (brand) a project UID resolves to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "basicDetails", default, deserialize_with = "crate::util::null_as_default")]
    pub basic_details: BasicDetails,
}

/// Public contact details of a website
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicDetails {
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    /// Logo file name on the image host
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub mobile_number: String,
}
