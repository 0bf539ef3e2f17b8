//! End-to-end tests for the employee routes, driven in-process through the
//! full router against both storage backends.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use employee_api::ServerState;
use employee_api::api::build_app;
use employee_api::db;
use employee_api::db::models::Employee;
use employee_api::db::repository::{
    MemoryRepository, RepoResult, Repository, SqliteEmployeeRepository,
};
use shared::models::CreateEmployeeRequest;

// ========== Harness ==========

fn memory_app() -> Router {
    build_app(ServerState::in_memory())
}

async fn sqlite_app() -> Router {
    let pool = db::connect_in_memory().await.unwrap();
    db::migrate(&pool).await.unwrap();
    build_app(ServerState::new(Arc::new(SqliteEmployeeRepository::new(pool))))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, _, body) = send_raw(app, method, uri, body.map(|b| b.to_string())).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, bytes.to_vec())
}

/// POST a create body and return the id named by `Location`
async fn create(app: &Router, body: Value) -> i64 {
    let (status, headers, _) = send_raw(app, "POST", "/employees", Some(body.to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    let location = headers.get(header::LOCATION).unwrap().to_str().unwrap();
    location.strip_prefix("/employees/").unwrap().parse().unwrap()
}

fn john() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "socialSecurityNumber": "123-45-6789",
        "address1": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62701",
        "phoneNumber": "555-010-0100",
        "email": "john.doe@example.com"
    })
}

fn jane() -> Value {
    json!({ "firstName": "Jane", "lastName": "Roe" })
}

/// Wraps a repository and counts mutating calls
struct CountingRepository {
    inner: MemoryRepository<Employee>,
    creates: AtomicUsize,
    updates: AtomicUsize,
}

impl CountingRepository {
    fn new() -> Self {
        Self {
            inner: MemoryRepository::new(),
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Repository<Employee> for CountingRepository {
    async fn get_all(&self) -> RepoResult<Vec<Employee>> {
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        self.inner.get_by_id(id).await
    }

    async fn create(&self, entity: &mut Employee) -> RepoResult<()> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(entity).await
    }

    async fn update(&self, entity: &Employee) -> RepoResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(entity).await
    }
}

// ========== Scenarios (run on every backend) ==========

async fn ids_follow_creation_order(app: Router) {
    assert_eq!(create(&app, john()).await, 1);
    assert_eq!(create(&app, jane()).await, 2);

    let (status, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["firstName"], "John");
    assert_eq!(list[1]["id"], 2);
    assert_eq!(list[1]["firstName"], "Jane");
}

async fn read_shapes_never_carry_ssn(app: Router) {
    let id = create(&app, john()).await;

    let (status, fetched) = send(&app, "GET", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched.get("socialSecurityNumber").is_none());
    assert_eq!(fetched["email"], "john.doe@example.com");
    assert_eq!(fetched["city"], "Springfield");

    let (_, list) = send(&app, "GET", "/employees", None).await;
    assert!(list[0].get("socialSecurityNumber").is_none());
}

async fn blank_optional_fields_are_stored_as_absent(app: Router) {
    let id = create(
        &app,
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "",
            "zipCode": "",
            "city": ""
        }),
    )
    .await;

    let (_, fetched) = send(&app, "GET", &format!("/employees/{id}"), None).await;
    assert!(fetched["email"].is_null());
    assert!(fetched["zipCode"].is_null());
    assert!(fetched["city"].is_null());

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/employees/{id}"),
        Some(json!({ "phoneNumber": "", "city": "Springfield" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["phoneNumber"].is_null());
    assert_eq!(updated["city"], "Springfield");
}

async fn update_replaces_contact_fields(app: Router) {
    send(&app, "POST", "/employees", Some(jane())).await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/employees/1",
        Some(json!({
            "firstName": "Ignored",
            "city": "Shelbyville",
            "zipCode": "12345-6789"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["firstName"], "Jane");
    assert_eq!(updated["city"], "Shelbyville");

    let (_, fetched) = send(&app, "GET", "/employees/1", None).await;
    assert_eq!(fetched["firstName"], "Jane");
    assert_eq!(fetched["zipCode"], "12345-6789");
}

async fn missing_ids_are_not_found(app: Router) {
    send(&app, "POST", "/employees", Some(jane())).await;

    let (status, body) = send(&app, "GET", "/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);

    let (status, _) = send(
        &app,
        "PUT",
        "/employees/99",
        Some(json!({ "city": "Nowhere" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert!(list[0]["city"].is_null());
}

#[tokio::test]
async fn test_memory_ids_follow_creation_order() {
    ids_follow_creation_order(memory_app()).await;
}

#[tokio::test]
async fn test_sqlite_ids_follow_creation_order() {
    ids_follow_creation_order(sqlite_app().await).await;
}

#[tokio::test]
async fn test_memory_read_shapes_never_carry_ssn() {
    read_shapes_never_carry_ssn(memory_app()).await;
}

#[tokio::test]
async fn test_sqlite_read_shapes_never_carry_ssn() {
    read_shapes_never_carry_ssn(sqlite_app().await).await;
}

#[tokio::test]
async fn test_memory_blank_optional_fields_are_stored_as_absent() {
    blank_optional_fields_are_stored_as_absent(memory_app()).await;
}

#[tokio::test]
async fn test_sqlite_blank_optional_fields_are_stored_as_absent() {
    blank_optional_fields_are_stored_as_absent(sqlite_app().await).await;
}

#[tokio::test]
async fn test_memory_update_replaces_contact_fields() {
    update_replaces_contact_fields(memory_app()).await;
}

#[tokio::test]
async fn test_sqlite_update_replaces_contact_fields() {
    update_replaces_contact_fields(sqlite_app().await).await;
}

#[tokio::test]
async fn test_memory_missing_ids_are_not_found() {
    missing_ids_are_not_found(memory_app()).await;
}

#[tokio::test]
async fn test_sqlite_missing_ids_are_not_found() {
    missing_ids_are_not_found(sqlite_app().await).await;
}

// ========== HTTP details ==========

#[tokio::test]
async fn test_create_sets_location_header() {
    let app = memory_app();
    let (status, headers, _) =
        send_raw(&app, "POST", "/employees", Some(jane().to_string())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/employees/1");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_create_echoes_submitted_body() {
    let app = memory_app();
    let (status, body) = send(&app, "POST", "/employees", Some(john())).await;
    assert_eq!(status, StatusCode::CREATED);

    let echoed: CreateEmployeeRequest = serde_json::from_value(body).unwrap();
    let submitted: CreateEmployeeRequest = serde_json::from_value(john()).unwrap();
    assert_eq!(echoed, submitted);
    assert_eq!(echoed.social_security_number.as_deref(), Some("123-45-6789"));
}

#[tokio::test]
async fn test_empty_list() {
    let (status, body) = send(&memory_app(), "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_integer_id_is_not_found() {
    let app = memory_app();
    let (status, _) = send(&app, "GET", "/employees/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "PUT", "/employees/1.5", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_request() {
    let app = memory_app();
    let (status, _, body) =
        send_raw(&app, "POST", "/employees", Some("{\"firstName\":".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], 5);

    let (_, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_update_of_missing_id_is_not_found_before_body_is_read() {
    let app = memory_app();
    let (status, _, body) =
        send_raw(&app, "PUT", "/employees/99", Some("not json".into())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], 8001);

    create(&app, jane()).await;
    let (status, _, _) = send_raw(&app, "PUT", "/employees/1", Some("not json".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = send(&memory_app(), "GET", "/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&memory_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "employee-api");
}

// ========== Validation ==========

#[tokio::test]
async fn test_invalid_create_never_reaches_store() {
    let repo = Arc::new(CountingRepository::new());
    let app = build_app(ServerState::new(repo.clone()));

    let (status, body) = send(
        &app,
        "POST",
        "/employees",
        Some(json!({
            "firstName": "",
            "lastName": "Doe",
            "zipCode": "ABCDE"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    let errors = body["details"]["errors"].as_array().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e["field"].as_str().unwrap()).collect();
    assert_eq!(fields, ["firstName", "zipCode"]);

    assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    let (_, list) = send(&app, "GET", "/employees", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_invalid_update_never_reaches_store() {
    let repo = Arc::new(CountingRepository::new());
    let app = build_app(ServerState::new(repo.clone()));
    send(&app, "POST", "/employees", Some(john())).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/employees/1",
        Some(json!({ "address1": "2 Elm St", "email": "bad" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["details"]["errors"].as_array().unwrap();
    assert!(
        errors
            .iter()
            .any(|e| e["message"] == "city cannot be cleared once set")
    );
    assert!(errors.iter().any(|e| e["field"] == "email"));

    assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    let (_, fetched) = send(&app, "GET", "/employees/1", None).await;
    assert_eq!(fetched["address1"], "1 Main St");
}

#[tokio::test]
async fn test_missing_required_name_is_a_violation() {
    let (status, body) = send(
        &memory_app(),
        "POST",
        "/employees",
        Some(json!({ "firstName": "John" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["errors"][0]["field"], "lastName");
}
