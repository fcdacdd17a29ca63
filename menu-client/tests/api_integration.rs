// menu-client/tests/api_integration.rs
// Integration tests against a local fixture backend

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use menu_client::{
    Attachment, ClientConfig, ClientError, CustomerRegistry, FeedbackForm, MAX_ATTACHMENT_BYTES,
    MemoryStore, MenuApi, ResolvedCustomer,
};
use menu_engine::{FilterState, MenuLoader};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::models::{CustomerProfile, Rating};
use std::sync::Arc;

const WEBSITE: &str = "w1";
const OUTLET: &str = "o1";

#[derive(Clone, Default)]
struct Backend {
    fail_categories: bool,
    fail_registration: bool,
    registrations: Arc<Mutex<Vec<Value>>>,
    feedback: Arc<Mutex<Vec<Value>>>,
}

async fn website_by_uid(Path(uid): Path<String>) -> Json<Value> {
    match uid.as_str() {
        "proj-1" => Json(json!({
            "message": "Website fetched successfully",
            "data": {
                "_id": "w1",
                "basicDetails": {"name": "Spice Route", "logo": "logo.png", "email": null}
            }
        })),
        _ => Json(json!({"message": "Website not found"})),
    }
}

async fn outlet(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    match id.as_str() {
        OUTLET => (
            StatusCode::OK,
            Json(json!({
                "message": "Success",
                "data": {
                    "_id": "o1",
                    "name": "MG Road",
                    "categories": [
                        {"categoryId": {"_id": "c1"}, "priority": 2},
                        {"categoryId": "c2", "priority": 1},
                        {"categoryId": null}
                    ]
                }
            })),
        ),
        "o-gone" => (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "Outlet not found"})),
        ),
        _ => (StatusCode::OK, Json(json!({"message": "No data"}))),
    }
}

async fn categories(
    State(backend): State<Backend>,
    Path(website): Path<String>,
) -> (StatusCode, Json<Value>) {
    if backend.fail_categories {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Database unavailable"})),
        );
    }
    if website != WEBSITE {
        return (StatusCode::OK, Json(json!({"data": null})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "data": [
                {"_id": "c1", "name": "Starters", "priority": 2},
                {"_id": "c2", "name": "Mains", "priority": 1},
                {"_id": "c9", "name": "Desserts", "priority": 3}
            ]
        })),
    )
}

async fn food_items(Path(website): Path<String>) -> Json<Value> {
    if website != WEBSITE {
        return Json(json!({}));
    }
    Json(json!({
        "data": [
            {
                "_id": "f1", "name": "Paneer Tikka", "food_type": "Veg-Only",
                "categoryId": "c1", "image": "paneer.jpg",
                "outletPrices": [{"outlet": "o1", "price": 240}]
            },
            {
                "_id": "f2", "name": "Chicken Biryani", "food_type": "Non-Veg",
                "categoryId": {"_id": "c2"}, "featured_type_Id": "ft1",
                "outletPrices": [{"outlet": {"_id": "o1"}, "price": 320.5}]
            },
            {
                "_id": "f3", "name": "Egg Curry", "food_type": "Egg",
                "categoryId": "c2",
                "outletPrices": [{"outlet": "o2", "price": 180}]
            }
        ]
    }))
}

async fn feature_types(Path(website): Path<String>) -> Json<Value> {
    if website != WEBSITE {
        return Json(json!({"data": {}}));
    }
    Json(json!({
        "data": {"featureTypes": [{"_id": "ft1", "title": "Chef's Special"}]}
    }))
}

async fn outlets(Path(website): Path<String>) -> Json<Value> {
    if website != WEBSITE {
        return Json(json!({"data": {}}));
    }
    Json(json!({
        "data": {"data": [{"_id": "o1", "name": "MG Road"}, {"_id": "o2", "name": "Indiranagar"}]}
    }))
}

async fn offers(Path(website): Path<String>) -> Json<Value> {
    match website.as_str() {
        WEBSITE => Json(json!({
            "data": [
                {
                    "_id": "of1", "title": "Weekend Feast", "subTitle": "20% off",
                    "description": "", "minOrderValue": 500,
                    "validity": {"start": "2024-01-01", "end": "2024-06-30"},
                    "status": "active"
                },
                {
                    "_id": "of2", "title": "Festive Combo", "subTitle": "Free dessert",
                    "description": "", "minOrderValue": 800,
                    "validity": {"start": "2024-01-01", "end": "2099-12-31T00:00:00Z"},
                    "status": "active"
                }
            ]
        })),
        _ => Json(json!({"data": {"message": "no offers"}})),
    }
}

async fn register(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if backend.fail_registration {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Registration unavailable"})),
        );
    }
    backend.registrations.lock().push(body);
    (StatusCode::CREATED, Json(json!({"message": "Customer registered"})))
}

async fn create_feedback(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if body["mobileNumber"].as_str().is_none_or(str::is_empty) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"message": "Mobile number is required"})),
        );
    }
    backend.feedback.lock().push(body);
    (StatusCode::CREATED, Json(json!({"message": "Feedback saved"})))
}

async fn upload(body: Bytes) -> (StatusCode, Json<Value>) {
    let text = String::from_utf8_lossy(&body);
    if text.contains("broken.jpg") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "Upload failed"})),
        );
    }
    let name = if text.contains("table.jpg") { "stored-table.jpg" } else { "stored-other.jpg" };
    (StatusCode::OK, Json(json!({"data": [{"imageNames": [name]}]})))
}

async fn spawn_backend(backend: Backend) -> String {
    let prefix = "/api/website";
    let app = Router::new()
        .route(&format!("{prefix}/auth/get-website-by-uid/{{id}}"), get(website_by_uid))
        .route(&format!("{prefix}/outlet-management/get-outlet-by-id/{{id}}"), get(outlet))
        .route(&format!("{prefix}/outlet-management/get-all-outlets/{{id}}"), get(outlets))
        .route(&format!("{prefix}/category/get-all-categories/{{id}}"), get(categories))
        .route(&format!("{prefix}/food-items/get-all-food-items/{{id}}"), get(food_items))
        .route(&format!("{prefix}/feature-type/get-feature-types/{{id}}"), get(feature_types))
        .route(&format!("{prefix}/offers/get-all-offers/{{id}}"), get(offers))
        .route(&format!("{prefix}/customer/register-user"), post(register))
        .route(&format!("{prefix}/feedback/create-feedback"), post(create_feedback))
        .route("/api/third-party/file-upload/upload-files", post(upload))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

async fn api_for(backend: Backend) -> MenuApi {
    let base = spawn_backend(backend).await;
    MenuApi::from_config(&ClientConfig::new(base).with_timeout(5)).unwrap()
}

#[tokio::test]
async fn test_menu_loads_through_http() {
    let api = api_for(Backend::default()).await;
    let loader = MenuLoader::new(api);

    let view = loader.load(WEBSITE, OUTLET).await.unwrap();
    let names: Vec<_> = view.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Mains", "Starters"]);
    // f3 has no price at this outlet
    assert_eq!(view.product_count(None), 2);
    assert_eq!(view.tabs(), vec!["all", "Chef's Special"]);

    let biryani = view.find_item("f2").unwrap();
    assert_eq!(biryani.badge.as_deref(), Some("Chef's Special"));
    let detail = view.product_detail(biryani, "https://img/");
    assert_eq!(detail.price, Decimal::new(3205, 1));

    let groups = view.grouped(&FilterState::default());
    let group_names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(group_names, vec!["Mains", "Starters"]);
}

#[tokio::test]
async fn test_failed_fetch_degrades_to_empty_menu() {
    let api = api_for(Backend {
        fail_categories: true,
        ..Backend::default()
    })
    .await;

    match api.categories(WEBSITE).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database unavailable");
        }
        other => panic!("unexpected: {:?}", other),
    }

    let view = MenuLoader::new(api).load(WEBSITE, OUTLET).await.unwrap();
    assert!(view.is_empty());
    assert!(view.grouped(&FilterState::default()).is_empty());
}

#[tokio::test]
async fn test_missing_data_is_empty() {
    let api = api_for(Backend::default()).await;

    assert!(api.outlet("o-unknown").await.unwrap().is_none());
    assert!(api.categories("w-empty").await.unwrap().is_empty());
    assert!(api.food_items("w-empty").await.unwrap().is_empty());
    assert!(api.feature_types("w-empty").await.unwrap().is_empty());
    assert!(api.outlets("w-empty").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_not_found_carries_server_message() {
    let api = api_for(Backend::default()).await;
    match api.outlet("o-gone").await {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "Outlet not found"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[tokio::test]
async fn test_website_by_project() {
    let api = api_for(Backend::default()).await;

    let website = api.website_by_project("proj-1").await.unwrap();
    assert_eq!(website.id, WEBSITE);
    assert_eq!(website.basic_details.name, "Spice Route");
    assert_eq!(website.basic_details.email, "");

    match api.website_by_project("proj-unknown").await {
        Err(ClientError::InvalidResponse(message)) => assert_eq!(message, "Website not found"),
        other => panic!("unexpected: {:?}", other),
    }
    assert!(matches!(
        api.website_by_project("  ").await,
        Err(ClientError::Validation(_))
    ));
}

#[tokio::test]
async fn test_outlet_listing() {
    let api = api_for(Backend::default()).await;
    let outlets = api.outlets(WEBSITE).await.unwrap();
    let names: Vec<_> = outlets.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["MG Road", "Indiranagar"]);
}

#[tokio::test]
async fn test_offers() {
    let api = api_for(Backend::default()).await;
    let offers = api.offers(WEBSITE).await.unwrap();
    assert_eq!(offers.len(), 2);

    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert!(offers[0].is_expired(now));
    assert!(!offers[1].is_expired(now));

    assert!(api.offers("w-object").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_registration_is_fire_and_forget() {
    let backend = Backend::default();
    let api = api_for(backend.clone()).await;
    let registry = CustomerRegistry::new(MemoryStore::new());
    let profile = CustomerProfile::new("Asha", "9876543210", "1990-04-12");

    let handle = registry.register(&api, WEBSITE, &profile).unwrap();
    // Remembered before the request completes
    assert!(registry.resolve(WEBSITE).is_some());
    assert_eq!(
        registry.greeting(WEBSITE),
        menu_client::GreetingDecision::AlreadyShown
    );

    handle.await.unwrap();
    let sent = backend.registrations.lock().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["mobileNumber"], "9876543210");
    assert_eq!(sent[0]["dateofBirth"], "1990-04-12");
    assert_eq!(sent[0]["websiteId"], WEBSITE);
}

#[tokio::test]
async fn test_registration_failure_does_not_reach_caller() {
    // Nothing listens on the discard port
    let api = MenuApi::from_config(&ClientConfig::new("http://127.0.0.1:9").with_timeout(2)).unwrap();
    let registry = CustomerRegistry::new(MemoryStore::new());
    let profile = CustomerProfile::new("Asha", "9876543210", "1990-04-12");

    let handle = registry.register(&api, WEBSITE, &profile).unwrap();
    handle.await.unwrap();
    assert_eq!(registry.resolve(WEBSITE).unwrap().profile, profile);
}

#[tokio::test]
async fn test_invalid_registration_rejected_locally() {
    let backend = Backend::default();
    let api = api_for(backend.clone()).await;
    let registry = CustomerRegistry::new(MemoryStore::new());

    let result = registry.register(&api, WEBSITE, &CustomerProfile::new("", "1", "1990-04-12"));
    assert!(matches!(result, Err(ClientError::Validation(_))));
    assert!(registry.resolve(WEBSITE).is_none());
    assert!(backend.registrations.lock().is_empty());
}

#[tokio::test]
async fn test_feedback_with_attachments() {
    let backend = Backend::default();
    let api = api_for(backend.clone()).await;

    let stored = api
        .upload_files(vec![
            Attachment {
                file_name: "table.jpg".into(),
                bytes: vec![1, 2, 3],
            },
            Attachment {
                file_name: "broken.jpg".into(),
                bytes: vec![4],
            },
        ])
        .await;
    assert_eq!(stored, vec!["stored-table.jpg"]);

    let form = FeedbackForm {
        overall_experience: Some(Rating::Good),
        food_quality: Some(Rating::Best),
        staff_service: Some(Rating::Good),
        cleanliness: Some(Rating::Average),
        remarks: "Great service".into(),
        uploaded_file_names: stored,
    };
    let customer = CustomerProfile::new("Asha", "9876543210", "1990-04-12");
    let request = form.into_request(WEBSITE, Some(OUTLET), &customer).unwrap();
    api.submit_feedback(&request).await.unwrap();

    let saved = backend.feedback.lock().clone();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["strings"]["stringTwo"], "Best");
    assert_eq!(saved[0]["arrays"]["arrayOne"][0], "stored-table.jpg");
    assert_eq!(saved[0]["outletId"], OUTLET);
}

#[tokio::test]
async fn test_feedback_rejection_message() {
    let api = api_for(Backend::default()).await;
    let form = FeedbackForm {
        overall_experience: Some(Rating::Bad),
        food_quality: Some(Rating::Bad),
        staff_service: Some(Rating::Bad),
        cleanliness: Some(Rating::Bad),
        ..FeedbackForm::default()
    };
    let request = form
        .into_request(WEBSITE, None, &CustomerProfile::new("Asha", "", "1990-04-12"))
        .unwrap();

    match api.submit_feedback(&request).await {
        Err(ClientError::Validation(message)) => assert_eq!(message, "Mobile number is required"),
        other => panic!("unexpected: {:?}", other),
    }
}

fn customer_from_other_website(registry: &CustomerRegistry<MemoryStore>) -> ResolvedCustomer {
    let profile = CustomerProfile::new("Asha", "9876543210", "1990-04-12");
    registry.remember("w-other", &profile).unwrap();
    let customer = registry.resolve(WEBSITE).unwrap();
    assert!(!customer.matches_current_website);
    customer
}

#[tokio::test]
async fn test_feedback_registers_customer_with_current_website() {
    let backend = Backend::default();
    let api = api_for(backend.clone()).await;
    let registry = CustomerRegistry::new(MemoryStore::new());
    let customer = customer_from_other_website(&registry);

    registry
        .ensure_registered(&api, WEBSITE, &customer)
        .await
        .unwrap();

    let sent = backend.registrations.lock().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["websiteId"], WEBSITE);
    assert!(registry.resolve(WEBSITE).unwrap().matches_current_website);
}

#[tokio::test]
async fn test_failed_registration_blocks_feedback() {
    let backend = Backend {
        fail_registration: true,
        ..Backend::default()
    };
    let api = api_for(backend.clone()).await;
    let registry = CustomerRegistry::new(MemoryStore::new());
    let customer = customer_from_other_website(&registry);

    match registry.ensure_registered(&api, WEBSITE, &customer).await {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Registration unavailable");
        }
        other => panic!("unexpected: {:?}", other),
    }
    // Still only known under the other website
    assert!(!registry.resolve(WEBSITE).unwrap().matches_current_website);
    assert!(backend.feedback.lock().is_empty());
}

#[tokio::test]
async fn test_known_customer_is_not_registered_again() {
    let backend = Backend::default();
    let api = api_for(backend.clone()).await;
    let registry = CustomerRegistry::new(MemoryStore::new());
    registry
        .remember(WEBSITE, &CustomerProfile::new("Asha", "9876543210", "1990-04-12"))
        .unwrap();
    let customer = registry.resolve(WEBSITE).unwrap();

    registry
        .ensure_registered(&api, WEBSITE, &customer)
        .await
        .unwrap();
    assert!(backend.registrations.lock().is_empty());
}

#[tokio::test]
async fn test_oversized_upload_never_sent() {
    let api = api_for(Backend::default()).await;
    let bytes = vec![0u8; MAX_ATTACHMENT_BYTES as usize + 1];
    match api.upload_file("huge.jpg", bytes).await {
        Err(ClientError::Validation(message)) => {
            assert_eq!(message, "File huge.jpg exceeds 5MB limit")
        }
        other => panic!("unexpected: {:?}", other),
    }
}
