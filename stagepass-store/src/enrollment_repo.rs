use async_trait::async_trait;
use sqlx::PgPool;

use stagepass_core::models::{Address, EnrollmentWithAddress};
use stagepass_core::repository::EnrollmentRepository;

pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    id: i32,
    user_id: i32,
    name: String,
    phone: String,
    address_id: i32,
    street: String,
    number: String,
    city: String,
    state: String,
    zip_code: String,
}

impl From<EnrollmentRow> for EnrollmentWithAddress {
    fn from(row: EnrollmentRow) -> Self {
        EnrollmentWithAddress {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            phone: row.phone,
            address: Address {
                id: row.address_id,
                street: row.street,
                number: row.number,
                city: row.city,
                state: row.state,
                zip_code: row.zip_code,
            },
        }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    async fn find_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<EnrollmentWithAddress>, Box<dyn std::error::Error + Send + Sync>>
    {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            "SELECT e.id, e.user_id, e.name, e.phone, \
                    a.id AS address_id, a.street, a.number, a.city, a.state, a.zip_code \
             FROM enrollments e \
             JOIN addresses a ON a.enrollment_id = e.id \
             WHERE e.user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EnrollmentWithAddress::from))
    }
}
