use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use stagepass_core::models::{Hotel, HotelWithRooms, Room};
use stagepass_core::repository::HotelRepository;

pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal structs for type-safe querying
#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i32,
    name: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: row.id,
            name: row.name,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i32,
    name: String,
    capacity: i32,
    hotel_id: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
            hotel_id: row.hotel_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn list_hotels(
        &self,
    ) -> Result<Vec<Hotel>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, HotelRow>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_id(
        &self,
        hotel_id: i32,
    ) -> Result<Option<HotelWithRooms>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, HotelRow>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Ordered so the Rooms collection is deterministic
        let rooms = sqlx::query_as::<_, RoomRow>(
            "SELECT id, name, capacity, hotel_id, created_at, updated_at \
             FROM rooms WHERE hotel_id = $1 ORDER BY id",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(HotelWithRooms {
            hotel: row.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }
}
