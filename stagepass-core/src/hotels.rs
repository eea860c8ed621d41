//! Entitlement-gated hotel listing.
//!
//! Both operations run the same ordered chain: resolve the caller's
//! enrollment, resolve the enrollment's ticket, fetch the hotel data, then
//! check ticket eligibility before checking whether the hotel data exists.
//! The eligibility check deliberately comes first, so an ineligible ticket
//! surfaces as `PaymentRequired` even when no hotel records exist.

use std::sync::Arc;

use crate::models::{Hotel, HotelWithRooms, Ticket};
use crate::repository::{EnrollmentRepository, HotelRepository, TicketRepository};

#[derive(Debug, thiserror::Error)]
pub enum HotelsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("payment required: {0}")]
    PaymentRequired(String),
    #[error("repository error: {0}")]
    Repository(Box<dyn std::error::Error + Send + Sync>),
}

/// Read-side service over the enrollment, ticket, and hotel repositories.
/// Stateless apart from the injected repositories; cheap to clone.
#[derive(Clone)]
pub struct HotelsService {
    enrollments: Arc<dyn EnrollmentRepository>,
    tickets: Arc<dyn TicketRepository>,
    hotels: Arc<dyn HotelRepository>,
}

impl HotelsService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        tickets: Arc<dyn TicketRepository>,
        hotels: Arc<dyn HotelRepository>,
    ) -> Self {
        Self {
            enrollments,
            tickets,
            hotels,
        }
    }

    pub async fn get_hotels(&self, user_id: i32) -> Result<Vec<Hotel>, HotelsError> {
        let ticket = self.resolve_ticket(user_id).await?;

        let hotels = self
            .hotels
            .list_hotels()
            .await
            .map_err(HotelsError::Repository)?;

        if !ticket.grants_hotel_access() {
            return Err(HotelsError::PaymentRequired(
                "ticket does not grant hotel access".to_string(),
            ));
        }
        if hotels.is_empty() {
            return Err(HotelsError::NotFound("no hotels available".to_string()));
        }

        Ok(hotels)
    }

    pub async fn get_hotel_by_id(
        &self,
        user_id: i32,
        hotel_id: i32,
    ) -> Result<HotelWithRooms, HotelsError> {
        let ticket = self.resolve_ticket(user_id).await?;

        let hotel = self
            .hotels
            .find_by_id(hotel_id)
            .await
            .map_err(HotelsError::Repository)?;

        if !ticket.grants_hotel_access() {
            return Err(HotelsError::PaymentRequired(
                "ticket does not grant hotel access".to_string(),
            ));
        }

        hotel.ok_or_else(|| HotelsError::NotFound(format!("hotel {hotel_id} not found")))
    }

    /// Shared prefix of both operations: enrollment must exist for the
    /// user, and a ticket must exist for that enrollment.
    async fn resolve_ticket(&self, user_id: i32) -> Result<Ticket, HotelsError> {
        let enrollment = self
            .enrollments
            .find_with_address_by_user_id(user_id)
            .await
            .map_err(HotelsError::Repository)?
            .ok_or_else(|| {
                HotelsError::NotFound(format!("no enrollment for user {user_id}"))
            })?;

        self.tickets
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(HotelsError::Repository)?
            .ok_or_else(|| {
                HotelsError::NotFound(format!("no ticket for enrollment {}", enrollment.id))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Address, EnrollmentWithAddress, Room, TicketStatus, TicketType,
    };
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubEnrollments(Option<EnrollmentWithAddress>);

    #[async_trait]
    impl EnrollmentRepository for StubEnrollments {
        async fn find_with_address_by_user_id(
            &self,
            _user_id: i32,
        ) -> Result<Option<EnrollmentWithAddress>, Box<dyn std::error::Error + Send + Sync>>
        {
            Ok(self.0.clone())
        }
    }

    struct StubTickets(Option<Ticket>);

    #[async_trait]
    impl TicketRepository for StubTickets {
        async fn find_by_enrollment_id(
            &self,
            _enrollment_id: i32,
        ) -> Result<Option<Ticket>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.0.clone())
        }
    }

    struct StubHotels {
        hotels: Vec<Hotel>,
        by_id: Option<HotelWithRooms>,
    }

    #[async_trait]
    impl HotelRepository for StubHotels {
        async fn list_hotels(
            &self,
        ) -> Result<Vec<Hotel>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.hotels.clone())
        }

        async fn find_by_id(
            &self,
            _hotel_id: i32,
        ) -> Result<Option<HotelWithRooms>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.by_id.clone())
        }
    }

    struct FailingHotels;

    #[async_trait]
    impl HotelRepository for FailingHotels {
        async fn list_hotels(
            &self,
        ) -> Result<Vec<Hotel>, Box<dyn std::error::Error + Send + Sync>> {
            Err("connection reset".into())
        }

        async fn find_by_id(
            &self,
            _hotel_id: i32,
        ) -> Result<Option<HotelWithRooms>, Box<dyn std::error::Error + Send + Sync>> {
            Err("connection reset".into())
        }
    }

    fn enrollment() -> EnrollmentWithAddress {
        EnrollmentWithAddress {
            id: 7,
            user_id: 1,
            name: "Jo Doe".to_string(),
            phone: "555-0100".to_string(),
            address: Address {
                id: 3,
                street: "Main St".to_string(),
                number: "42".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62701".to_string(),
            },
        }
    }

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            id: 11,
            enrollment_id: 7,
            status,
            ticket_type: TicketType {
                id: 2,
                name: "Full pass".to_string(),
                price: 25_000,
                is_remote,
                includes_hotel,
            },
        }
    }

    fn hotel(id: i32) -> Hotel {
        let now = Utc::now();
        Hotel {
            id,
            name: format!("Hotel {id}"),
            image: "https://img.example/hotel.jpg".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn hotel_with_rooms(id: i32, rooms: Vec<Room>) -> HotelWithRooms {
        HotelWithRooms {
            hotel: hotel(id),
            rooms,
        }
    }

    fn room(id: i32, hotel_id: i32) -> Room {
        let now = Utc::now();
        Room {
            id,
            name: format!("{id:03}"),
            capacity: 2,
            hotel_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        enrollment: Option<EnrollmentWithAddress>,
        ticket: Option<Ticket>,
        hotels: Vec<Hotel>,
        by_id: Option<HotelWithRooms>,
    ) -> HotelsService {
        HotelsService::new(
            Arc::new(StubEnrollments(enrollment)),
            Arc::new(StubTickets(ticket)),
            Arc::new(StubHotels { hotels, by_id }),
        )
    }

    #[tokio::test]
    async fn missing_enrollment_is_not_found() {
        let svc = service(None, None, vec![hotel(1)], None);
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_hotel_by_id(1, 1).await,
            Err(HotelsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn missing_ticket_is_not_found() {
        let svc = service(Some(enrollment()), None, vec![hotel(1)], None);
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::NotFound(_))
        ));
        assert!(matches!(
            svc.get_hotel_by_id(1, 1).await,
            Err(HotelsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn reserved_ticket_requires_payment() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Reserved, false, true)),
            vec![hotel(1)],
            Some(hotel_with_rooms(1, vec![])),
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::PaymentRequired(_))
        ));
        assert!(matches!(
            svc.get_hotel_by_id(1, 1).await,
            Err(HotelsError::PaymentRequired(_))
        ));
    }

    #[tokio::test]
    async fn remote_ticket_requires_payment_even_when_paid() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, true, true)),
            vec![hotel(1)],
            Some(hotel_with_rooms(1, vec![])),
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::PaymentRequired(_))
        ));
    }

    #[tokio::test]
    async fn ticket_without_hotel_addon_requires_payment() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, false)),
            vec![hotel(1)],
            Some(hotel_with_rooms(1, vec![])),
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::PaymentRequired(_))
        ));
    }

    #[tokio::test]
    async fn eligible_but_no_hotels_is_not_found() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            vec![],
            None,
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn ineligible_ticket_wins_over_empty_hotel_list() {
        // Both guards fail at once; eligibility is checked first.
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Reserved, false, true)),
            vec![],
            None,
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::PaymentRequired(_))
        ));
        assert!(matches!(
            svc.get_hotel_by_id(1, 9).await,
            Err(HotelsError::PaymentRequired(_))
        ));
    }

    #[tokio::test]
    async fn eligible_user_gets_hotel_list() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            vec![hotel(1), hotel(2)],
            None,
        );
        let hotels = svc.get_hotels(1).await.unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].id, 1);
    }

    #[tokio::test]
    async fn eligible_user_missing_hotel_id_is_not_found() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            vec![hotel(1)],
            None,
        );
        assert!(matches!(
            svc.get_hotel_by_id(1, 99).await,
            Err(HotelsError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn hotel_by_id_includes_rooms() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            vec![hotel(1)],
            Some(hotel_with_rooms(1, vec![room(10, 1), room(11, 1)])),
        );
        let found = svc.get_hotel_by_id(1, 1).await.unwrap();
        assert_eq!(found.hotel.id, 1);
        assert_eq!(found.rooms.len(), 2);
        assert_eq!(found.rooms[0].hotel_id, 1);
    }

    #[tokio::test]
    async fn hotel_without_rooms_has_empty_rooms_array() {
        let svc = service(
            Some(enrollment()),
            Some(ticket(TicketStatus::Paid, false, true)),
            vec![hotel(1)],
            Some(hotel_with_rooms(1, vec![])),
        );
        let found = svc.get_hotel_by_id(1, 1).await.unwrap();
        assert!(found.rooms.is_empty());
    }

    #[tokio::test]
    async fn storage_fault_surfaces_as_repository_error() {
        let svc = HotelsService::new(
            Arc::new(StubEnrollments(Some(enrollment()))),
            Arc::new(StubTickets(Some(ticket(TicketStatus::Paid, false, true)))),
            Arc::new(FailingHotels),
        );
        assert!(matches!(
            svc.get_hotels(1).await,
            Err(HotelsError::Repository(_))
        ));
    }

    #[test]
    fn single_hotel_serializes_with_capitalized_rooms() {
        let value =
            serde_json::to_value(hotel_with_rooms(1, vec![room(10, 1)])).unwrap();
        assert!(value.get("Rooms").is_some());
        assert_eq!(value["Rooms"][0]["hotelId"], 1);
        assert!(value.get("createdAt").is_some());
    }
}
