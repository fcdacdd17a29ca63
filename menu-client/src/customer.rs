//! Customer identity
//!
//! Remembers who the customer is per website and decides whether to greet
//! them, show the registration form, or stay out of the way. Key naming and
//! lookup order live here and nowhere else.

use crate::api::MenuApi;
use crate::http::HttpClient;
use crate::store::{KeyValueStore, StoreError};
use crate::{ClientError, ClientResult};
use chrono::NaiveDate;
use shared::models::{CustomerProfile, RegisterCustomerRequest};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const PROFILE_KEY_PREFIX: &str = "userData_";
const GREETING_KEY_PREFIX: &str = "greetingShown_";

/// A remembered profile and where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCustomer {
    pub profile: CustomerProfile,
    /// Website the profile was stored under
    pub source_website_id: String,
    pub matches_current_website: bool,
}

/// What to show when a customer opens a website's menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingDecision {
    /// Already greeted this session
    AlreadyShown,
    /// Known customer, greet by name
    Greet(ResolvedCustomer),
    /// Unknown customer, ask for details
    ShowForm,
}

/// Check that a profile can be registered
pub fn validate_profile(profile: &CustomerProfile) -> ClientResult<()> {
    if profile.name.trim().is_empty() {
        return Err(ClientError::Validation("Please enter your name".into()));
    }
    if profile.phone.trim().is_empty() {
        return Err(ClientError::Validation("Please enter your phone number".into()));
    }
    if NaiveDate::parse_from_str(&profile.date_of_birth, "%Y-%m-%d").is_err() {
        return Err(ClientError::Validation("Please select your date of birth".into()));
    }
    Ok(())
}

/// Customer identity over a key-value store
#[derive(Debug, Clone)]
pub struct CustomerRegistry<S> {
    store: S,
}

impl<S: KeyValueStore> CustomerRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn profile_key(website_id: &str) -> String {
        format!("{}{}", PROFILE_KEY_PREFIX, website_id)
    }

    pub fn greeting_key(website_id: &str) -> String {
        format!("{}{}", GREETING_KEY_PREFIX, website_id)
    }

    fn read_profile(&self, key: &str) -> Option<CustomerProfile> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                debug!(key, error = %e, "Skipping unparseable customer entry");
                None
            }
        }
    }

    /// Find a remembered profile
    ///
    /// The current website's entry wins; otherwise the first parseable entry
    /// of any website in key order.
    pub fn resolve(&self, website_id: &str) -> Option<ResolvedCustomer> {
        if let Some(profile) = self.read_profile(&Self::profile_key(website_id)) {
            return Some(ResolvedCustomer {
                profile,
                source_website_id: website_id.to_string(),
                matches_current_website: true,
            });
        }

        self.store
            .keys()
            .into_iter()
            .filter_map(|key| {
                let source = key.strip_prefix(PROFILE_KEY_PREFIX)?.to_string();
                let profile = self.read_profile(&key)?;
                Some(ResolvedCustomer {
                    profile,
                    matches_current_website: source == website_id,
                    source_website_id: source,
                })
            })
            .next()
    }

    /// Decide the greeting for `website_id`
    pub fn greeting(&self, website_id: &str) -> GreetingDecision {
        if self.store.has_session_flag(&Self::greeting_key(website_id)) {
            return GreetingDecision::AlreadyShown;
        }
        match self.resolve(website_id) {
            Some(customer) => GreetingDecision::Greet(customer),
            None => GreetingDecision::ShowForm,
        }
    }

    /// Persist a profile under `website_id`
    pub fn remember(&self, website_id: &str, profile: &CustomerProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile)?;
        self.store.set(&Self::profile_key(website_id), &json)
    }

    pub fn mark_greeting_shown(&self, website_id: &str) {
        self.store.set_session_flag(&Self::greeting_key(website_id));
    }

    /// Register a customer with `website_id`
    ///
    /// Validates, stores the profile locally, marks the greeting as shown and
    /// sends the registration in the background. The caller never waits on, or
    /// learns about, the backend's answer; the handle exists for shutdown.
    pub fn register<H>(
        &self,
        api: &MenuApi<H>,
        website_id: &str,
        profile: &CustomerProfile,
    ) -> ClientResult<JoinHandle<()>>
    where
        H: HttpClient + Clone + 'static,
    {
        let website_id = website_id.trim();
        if website_id.is_empty() {
            return Err(ClientError::Validation("Website ID could not be determined".into()));
        }
        validate_profile(profile)?;

        self.remember(website_id, profile)?;
        self.mark_greeting_shown(website_id);
        info!(website_id, "Customer remembered");

        let api = api.clone();
        let request = RegisterCustomerRequest::new(profile, website_id);
        Ok(tokio::spawn(async move {
            if let Err(e) = api.register_customer(&request).await {
                warn!(website_id = %request.website_id, error = %e, "Customer registration failed (non-blocking)");
            }
        }))
    }

    /// Register a customer with `website_id` and wait for the backend
    ///
    /// The profile is stored under `website_id` only once the backend accepts
    /// it; a failed request leaves the store untouched.
    pub async fn register_and_wait<H: HttpClient>(
        &self,
        api: &MenuApi<H>,
        website_id: &str,
        profile: &CustomerProfile,
    ) -> ClientResult<()> {
        let website_id = website_id.trim();
        if website_id.is_empty() {
            return Err(ClientError::Validation("Website ID could not be determined".into()));
        }
        validate_profile(profile)?;

        let request = RegisterCustomerRequest::new(profile, website_id);
        if let Err(e) = api.register_customer(&request).await {
            warn!(website_id, error = %e, "Customer registration failed");
            return Err(e);
        }
        self.remember(website_id, profile)?;
        info!(website_id, "Customer registered");
        Ok(())
    }

    /// Make sure a resolved customer is registered with `website_id`
    ///
    /// A profile remembered for another website is registered with this one
    /// first; a failure aborts.
    pub async fn ensure_registered<H: HttpClient>(
        &self,
        api: &MenuApi<H>,
        website_id: &str,
        customer: &ResolvedCustomer,
    ) -> ClientResult<()> {
        if customer.matches_current_website {
            return Ok(());
        }
        debug!(
            website_id,
            source = %customer.source_website_id,
            "Registering remembered customer with current website"
        );
        self.register_and_wait(api, website_id, &customer.profile)
            .await
    }

    /// Accept the greeting of a known customer, re-registering them with the
    /// current website
    pub fn confirm_greeting<H>(
        &self,
        api: &MenuApi<H>,
        website_id: &str,
        customer: &ResolvedCustomer,
    ) -> ClientResult<JoinHandle<()>>
    where
        H: HttpClient + Clone + 'static,
    {
        self.register(api, website_id, &customer.profile)
    }
}
