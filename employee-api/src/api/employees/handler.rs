//! Employee API Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use shared::models::{CreateEmployeeRequest, GetEmployeeResponse, UpdateEmployeeRequest};

use crate::api::convert::apply_update;
use crate::api::extract::{EmployeeId, JsonBody};
use crate::core::ServerState;
use crate::db::models::Employee;
use crate::utils::validation::{ensure_valid, validate_create, validate_update};
use crate::utils::{AppError, AppResult};

/// List all employees in creation order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GetEmployeeResponse>>> {
    let employees = state.employees.get_all().await?;
    Ok(Json(employees.iter().map(GetEmployeeResponse::from).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
) -> AppResult<Json<GetEmployeeResponse>> {
    let employee = find(&state, id).await?;
    Ok(Json(GetEmployeeResponse::from(employee)))
}

/// Create a new employee
///
/// Responds with the submitted payload and a `Location` for the new record.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    let violations = validate_create(&payload);
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "Rejected employee create");
    }
    ensure_valid(violations)?;

    let mut employee = Employee::from(payload.clone());
    state.employees.create(&mut employee).await?;
    tracing::info!(id = employee.id, "Employee created");

    let location = format!("/employees/{}", employee.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(payload)))
}

/// Replace the address and contact fields of an employee
///
/// The lookup runs before the body is inspected, so a missing id is 404
/// whatever the payload.
pub async fn update(
    State(state): State<ServerState>,
    EmployeeId(id): EmployeeId,
    body: Result<JsonBody<UpdateEmployeeRequest>, AppError>,
) -> AppResult<Json<GetEmployeeResponse>> {
    let mut employee = find(&state, id).await?;
    let JsonBody(payload) = body?;

    let violations = validate_update(&payload, &employee);
    if !violations.is_empty() {
        tracing::debug!(id, count = violations.len(), "Rejected employee update");
    }
    ensure_valid(violations)?;

    apply_update(&mut employee, payload);
    state.employees.update(&employee).await?;
    tracing::info!(id, "Employee updated");

    Ok(Json(GetEmployeeResponse::from(employee)))
}

async fn find(state: &ServerState, id: i64) -> AppResult<Employee> {
    state.employees.get_by_id(id).await?.ok_or_else(|| {
        tracing::debug!(id, "Employee not found");
        AppError::employee_not_found(id)
    })
}
