pub mod app_config;
pub mod database;
pub mod enrollment_repo;
pub mod hotel_repo;
pub mod ticket_repo;

pub use database::DbClient;
pub use enrollment_repo::PgEnrollmentRepository;
pub use hotel_repo::PgHotelRepository;
pub use ticket_repo::PgTicketRepository;
