use async_trait::async_trait;

use crate::models::{EnrollmentWithAddress, Hotel, HotelWithRooms, Ticket};

/// Repository trait for enrollment lookups
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<EnrollmentWithAddress>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for ticket lookups
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: i32,
    ) -> Result<Option<Ticket>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for hotel data access. Absence is not an error at this
/// layer: the list variant returns an empty vec and the by-id variant
/// returns `None`; the caller decides what that means.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn list_hotels(
        &self,
    ) -> Result<Vec<Hotel>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, Box<dyn std::error::Error + Send + Sync>>;
}
