//! Menu backend endpoints
//!
//! Thin typed wrappers over [`HttpClient`]. Every read unwraps the `data`
//! envelope, treating a missing payload as empty.

use crate::feedback::{Attachment, MAX_ATTACHMENT_BYTES};
use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use menu_engine::MenuSource;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use shared::models::{
    Category, FeatureType, FeedbackRequest, FoodItem, Offer, Outlet, RegisterCustomerRequest,
    Website,
};
use shared::response::{DataEnvelope, FeatureTypesData, NestedList, UploadedFile};
use tracing::warn;

// ========== Paths ==========

const WEBSITE_BY_UID: &str = "website/auth/get-website-by-uid";
const OUTLET_BY_ID: &str = "website/outlet-management/get-outlet-by-id";
const ALL_OUTLETS: &str = "website/outlet-management/get-all-outlets";
const ALL_CATEGORIES: &str = "website/category/get-all-categories";
const ALL_FOOD_ITEMS: &str = "website/food-items/get-all-food-items";
const FEATURE_TYPES: &str = "website/feature-type/get-feature-types";
const ALL_OFFERS: &str = "website/offers/get-all-offers";
const REGISTER_CUSTOMER: &str = "website/customer/register-user";
const CREATE_FEEDBACK: &str = "website/feedback/create-feedback";
const UPLOAD_FILES: &str = "third-party/file-upload/upload-files";

/// Typed access to the menu backend
#[derive(Debug, Clone)]
pub struct MenuApi<H = NetworkHttpClient> {
    http: H,
}

impl MenuApi<NetworkHttpClient> {
    /// Build a network-backed API from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_http_client()?))
    }
}

impl<H: HttpClient> MenuApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    async fn get_data<T: DeserializeOwned + Default>(&self, path: &str) -> ClientResult<T> {
        Ok(self
            .http
            .get::<DataEnvelope<T>>(path)
            .await?
            .into_data_or_default())
    }

    // ========== Website ==========

    /// Resolve a project UID to its website
    ///
    /// Unlike the menu reads, a missing payload is an error here.
    pub async fn website_by_project(&self, project_id: &str) -> ClientResult<Website> {
        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(ClientError::Validation("No project ID provided".into()));
        }
        let envelope: DataEnvelope<Website> = self
            .http
            .get(&format!("{}/{}", WEBSITE_BY_UID, project_id))
            .await?;
        match envelope.data {
            Some(website) if !website.id.is_empty() => Ok(website),
            _ => Err(ClientError::InvalidResponse(
                envelope
                    .message
                    .unwrap_or_else(|| "Invalid response format".to_string()),
            )),
        }
    }

    // ========== Menu snapshots ==========

    /// Outlet document, `None` when the backend returns no data
    pub async fn outlet(&self, outlet_id: &str) -> ClientResult<Option<Outlet>> {
        let path = format!("{}/{}", OUTLET_BY_ID, outlet_id);
        Ok(self.http.get::<DataEnvelope<Outlet>>(&path).await?.data)
    }

    pub async fn categories(&self, website_id: &str) -> ClientResult<Vec<Category>> {
        self.get_data(&format!("{}/{}", ALL_CATEGORIES, website_id))
            .await
    }

    pub async fn food_items(&self, website_id: &str) -> ClientResult<Vec<FoodItem>> {
        self.get_data(&format!("{}/{}", ALL_FOOD_ITEMS, website_id))
            .await
    }

    pub async fn feature_types(&self, website_id: &str) -> ClientResult<Vec<FeatureType>> {
        let data: FeatureTypesData = self
            .get_data(&format!("{}/{}", FEATURE_TYPES, website_id))
            .await?;
        Ok(data.feature_types)
    }

    // ========== Outlets & offers ==========

    /// All outlets of a website
    pub async fn outlets(&self, website_id: &str) -> ClientResult<Vec<Outlet>> {
        let list: NestedList<Outlet> = self
            .get_data(&format!("{}/{}", ALL_OUTLETS, website_id))
            .await?;
        Ok(list.data)
    }

    /// Offers of a website; a non-array payload is treated as no offers
    pub async fn offers(&self, website_id: &str) -> ClientResult<Vec<Offer>> {
        let envelope: DataEnvelope<serde_json::Value> = self
            .http
            .get(&format!("{}/{}", ALL_OFFERS, website_id))
            .await?;
        match envelope.data {
            Some(value @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(value)?),
            _ => Ok(Vec::new()),
        }
    }

    // ========== Customer & feedback ==========

    pub async fn register_customer(&self, request: &RegisterCustomerRequest) -> ClientResult<()> {
        self.http.post_no_content(REGISTER_CUSTOMER, request).await
    }

    pub async fn submit_feedback(&self, request: &FeedbackRequest) -> ClientResult<()> {
        self.http.post_no_content(CREATE_FEEDBACK, request).await
    }

    /// Upload one file and return its stored name
    pub async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        if bytes.len() as u64 > MAX_ATTACHMENT_BYTES {
            return Err(ClientError::Validation(format!(
                "File {} exceeds 5MB limit",
                file_name
            )));
        }
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let envelope: DataEnvelope<Vec<UploadedFile>> =
            self.http.post_multipart(UPLOAD_FILES, form).await?;
        envelope
            .into_data_or_default()
            .into_iter()
            .next()
            .and_then(|f| f.image_names.into_iter().next())
            .ok_or_else(|| ClientError::InvalidResponse("upload returned no file name".into()))
    }

    /// Upload files one after another, skipping the ones that fail
    pub async fn upload_files<I>(&self, files: I) -> Vec<String>
    where
        I: IntoIterator<Item = Attachment>,
    {
        let mut stored = Vec::new();
        for Attachment { file_name, bytes } in files {
            match self.upload_file(&file_name, bytes).await {
                Ok(name) => stored.push(name),
                Err(e) => warn!(%file_name, error = %e, "Upload failed, skipping"),
            }
        }
        stored
    }
}

#[async_trait]
impl<H: HttpClient> MenuSource for MenuApi<H> {
    type Error = ClientError;

    async fn outlet(&self, outlet_id: &str) -> Result<Option<Outlet>, ClientError> {
        MenuApi::outlet(self, outlet_id).await
    }

    async fn categories(&self, website_id: &str) -> Result<Vec<Category>, ClientError> {
        MenuApi::categories(self, website_id).await
    }

    async fn food_items(&self, website_id: &str) -> Result<Vec<FoodItem>, ClientError> {
        MenuApi::food_items(self, website_id).await
    }

    async fn feature_types(&self, website_id: &str) -> Result<Vec<FeatureType>, ClientError> {
        MenuApi::feature_types(self, website_id).await
    }
}
