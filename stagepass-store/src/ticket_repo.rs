use async_trait::async_trait;
use sqlx::PgPool;

use stagepass_core::models::{Ticket, TicketStatus, TicketType};
use stagepass_core::repository::TicketRepository;

pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    id: i32,
    enrollment_id: i32,
    status: String,
    ticket_type_id: i32,
    ticket_type_name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl TicketRow {
    fn into_ticket(self) -> Result<Ticket, Box<dyn std::error::Error + Send + Sync>> {
        let status = self
            .status
            .parse::<TicketStatus>()
            .map_err(Box::<dyn std::error::Error + Send + Sync>::from)?;

        Ok(Ticket {
            id: self.id,
            enrollment_id: self.enrollment_id,
            status,
            ticket_type: TicketType {
                id: self.ticket_type_id,
                name: self.ticket_type_name,
                price: self.price,
                is_remote: self.is_remote,
                includes_hotel: self.includes_hotel,
            },
        })
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, TicketRow>(
            "SELECT t.id, t.enrollment_id, t.status, \
                    tt.id AS ticket_type_id, tt.name AS ticket_type_name, \
                    tt.price, tt.is_remote, tt.includes_hotel \
             FROM tickets t \
             JOIN ticket_types tt ON tt.id = t.ticket_type_id \
             WHERE t.enrollment_id = $1",
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TicketRow::into_ticket).transpose()
    }
}
