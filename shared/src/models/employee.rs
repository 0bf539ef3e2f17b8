//! Employee Model
//!
//! Wire shapes only. The stored record lives in the server's `db::models`
//! and is never serialized directly.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email_address,
    validate_not_blank, validate_phone_number, validate_ssn, validate_zip_code,
};

/// Create employee payload
///
/// The only shape that carries `socialSecurityNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// Missing is treated as empty so it surfaces as a violation
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = MAX_NAME_LEN, message = "must be at most 100 characters")
    )]
    pub first_name: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = MAX_NAME_LEN, message = "must be at most 100 characters")
    )]
    pub last_name: String,
    #[validate(custom(function = "validate_ssn"))]
    pub social_security_number: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "must be at most 500 characters"))]
    pub address1: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "must be at most 500 characters"))]
    pub address2: Option<String>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "must be at most 100 characters"))]
    pub state: Option<String>,
    #[validate(custom(function = "validate_zip_code"))]
    pub zip_code: Option<String>,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
    #[validate(
        custom(function = "validate_email_address"),
        length(max = MAX_EMAIL_LEN, message = "must be at most 254 characters")
    )]
    pub email: Option<String>,
}

/// Update employee payload
///
/// Replaces every mutable address/contact field; an absent field clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[validate(length(max = MAX_ADDRESS_LEN, message = "must be at most 500 characters"))]
    pub address1: Option<String>,
    #[validate(length(max = MAX_ADDRESS_LEN, message = "must be at most 500 characters"))]
    pub address2: Option<String>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "must be at most 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = MAX_SHORT_TEXT_LEN, message = "must be at most 100 characters"))]
    pub state: Option<String>,
    #[validate(custom(function = "validate_zip_code"))]
    pub zip_code: Option<String>,
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,
    #[validate(
        custom(function = "validate_email_address"),
        length(max = MAX_EMAIL_LEN, message = "must be at most 254 characters")
    )]
    pub email: Option<String>,
}

/// Employee read shape (no social security number)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEmployeeResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}
