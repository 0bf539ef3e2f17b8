//! Input validation
//!
//! Pure functions from a request DTO to the list of field violations.
//! Field rules are declared on the DTOs (`shared::models::employee`) with
//! `validator`; rules that need the stored record live here.
//!
//! An empty list means valid.

use shared::error::{AppError, FieldViolation};
use shared::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use validator::{Validate, ValidationErrors};

use crate::db::models::Employee;

/// Violations for a create request
pub fn validate_create(req: &CreateEmployeeRequest) -> Vec<FieldViolation> {
    flatten(req.validate())
}

/// Violations for an update request against the currently stored employee
pub fn validate_update(req: &UpdateEmployeeRequest, existing: &Employee) -> Vec<FieldViolation> {
    let mut violations = flatten(req.validate());

    let fields = [
        ("address1", &existing.address1, &req.address1),
        ("address2", &existing.address2, &req.address2),
        ("city", &existing.city, &req.city),
        ("state", &existing.state, &req.state),
        ("zipCode", &existing.zip_code, &req.zip_code),
        ("phoneNumber", &existing.phone_number, &req.phone_number),
        ("email", &existing.email, &req.email),
    ];
    for (field, current, incoming) in fields {
        if is_set(current) && !is_set(incoming) {
            violations.push(FieldViolation::new(
                field,
                format!("{field} cannot be cleared once set"),
            ));
        }
    }

    sort(&mut violations);
    violations
}

/// `Err` with every violation when the list is non-empty
pub fn ensure_valid(violations: Vec<FieldViolation>) -> Result<(), AppError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation_failed(violations))
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn flatten(result: Result<(), ValidationErrors>) -> Vec<FieldViolation> {
    let Err(errors) = result else {
        return Vec::new();
    };

    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter()
                .map(|err| {
                    let detail = err
                        .message
                        .as_deref()
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("is invalid ({})", err.code));
                    FieldViolation::new(field.clone(), format!("{field} {detail}"))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    sort(&mut violations);
    violations
}

fn sort(violations: &mut [FieldViolation]) {
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
}

/// `zip_code` -> `zipCode`, matching the wire spelling
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
