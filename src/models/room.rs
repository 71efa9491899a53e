use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i64,
    pub room_name: String,
    pub room_type: String,
    pub capacity: i32,    // expected >= 1, not enforced by the schema
    pub hourly_rate: f64, // expected >= 0, not enforced by the schema
    pub amenities: Vec<String>,
    pub location: String,
    pub floor: i32,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Room {
    // Only active rooms take part in availability checks
    pub async fn list_active(db: &crate::database::Database) -> Result<Vec<Room>, sqlx::Error> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE is_active = true ORDER BY room_id"
        )
        .fetch_all(&db.pool)
        .await
    }
}
