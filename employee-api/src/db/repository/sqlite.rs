//! SQLite Employee Repository

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult, Repository};
use crate::db::models::Employee;

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Repository<Employee> for SqliteEmployeeRepository {
    async fn get_all(&self) -> RepoResult<Vec<Employee>> {
        let rows: Vec<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, social_security_number,
                   address1, address2, city, state, zip_code, phone_number, email
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<Employee>> {
        let row: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, social_security_number,
                   address1, address2, city, state, zip_code, phone_number, email
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, entity: &mut Employee) -> RepoResult<()> {
        // id omitted: INTEGER PRIMARY KEY assigns max(id) + 1
        let result = sqlx::query(
            r#"
            INSERT INTO employees (
                first_name, last_name, social_security_number,
                address1, address2, city, state, zip_code, phone_number, email
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.social_security_number)
        .bind(&entity.address1)
        .bind(&entity.address2)
        .bind(&entity.city)
        .bind(&entity.state)
        .bind(&entity.zip_code)
        .bind(&entity.phone_number)
        .bind(&entity.email)
        .execute(&self.pool)
        .await?;

        entity.id = result.last_insert_rowid();
        Ok(())
    }

    async fn update(&self, entity: &Employee) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE employees SET
                address1 = ?, address2 = ?, city = ?, state = ?,
                zip_code = ?, phone_number = ?, email = ?
            WHERE id = ?
            "#,
        )
        .bind(&entity.address1)
        .bind(&entity.address2)
        .bind(&entity.city)
        .bind(&entity.state)
        .bind(&entity.zip_code)
        .bind(&entity.phone_number)
        .bind(&entity.email)
        .bind(entity.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(entity.id));
        }
        Ok(())
    }
}
