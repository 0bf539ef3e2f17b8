//! Employee Model

use crate::db::repository::Entity;

/// Employee record as stored
///
/// Not serializable on purpose: the wire shapes live in
/// `shared::models::employee` and are produced by `api::convert`.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub social_security_number: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl Entity for Employee {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    /// Only address and contact fields change after creation.
    fn apply_mutable(&mut self, source: &Self) {
        self.address1 = source.address1.clone();
        self.address2 = source.address2.clone();
        self.city = source.city.clone();
        self.state = source.state.clone();
        self.zip_code = source.zip_code.clone();
        self.phone_number = source.phone_number.clone();
        self.email = source.email.clone();
    }
}
