//! Conversions between stored records (`db::models`) and wire shapes
//! (`shared::models`)

use shared::models::{CreateEmployeeRequest, GetEmployeeResponse, UpdateEmployeeRequest};

use crate::db::models::Employee;

/// Blank optional text is stored as absent
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============ Employee ============

impl From<CreateEmployeeRequest> for Employee {
    /// The id stays 0 until the store assigns one.
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            id: 0,
            first_name: req.first_name,
            last_name: req.last_name,
            social_security_number: normalize(req.social_security_number),
            address1: normalize(req.address1),
            address2: normalize(req.address2),
            city: normalize(req.city),
            state: normalize(req.state),
            zip_code: normalize(req.zip_code),
            phone_number: normalize(req.phone_number),
            email: normalize(req.email),
        }
    }
}

impl From<&Employee> for GetEmployeeResponse {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            address1: e.address1.clone(),
            address2: e.address2.clone(),
            city: e.city.clone(),
            state: e.state.clone(),
            zip_code: e.zip_code.clone(),
            phone_number: e.phone_number.clone(),
            email: e.email.clone(),
        }
    }
}

impl From<Employee> for GetEmployeeResponse {
    fn from(e: Employee) -> Self {
        Self::from(&e)
    }
}

/// Overwrite every mutable field of `employee` with the update payload
pub fn apply_update(employee: &mut Employee, req: UpdateEmployeeRequest) {
    employee.address1 = normalize(req.address1);
    employee.address2 = normalize(req.address2);
    employee.city = normalize(req.city);
    employee.state = normalize(req.state);
    employee.zip_code = normalize(req.zip_code);
    employee.phone_number = normalize(req.phone_number);
    employee.email = normalize(req.email);
}
