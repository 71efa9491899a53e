use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::availability::STATUS_CONFIRMED;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub room_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub booked_by: String,
    pub booking_status: String, // confirmed, cancelled, etc.
    pub total_cost: f64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Booking {
    // A confirmed booking overlapping [start_time, end_time) blocks the room.
    // Half-open intervals: a booking ending exactly at start_time (or starting
    // exactly at end_time) is not a conflict.
    pub async fn has_confirmed_conflict(
        db: &crate::database::Database,
        room_id: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
              SELECT 1
              FROM bookings
              WHERE room_id = $1
                AND booking_status = $2
                AND start_time < $3
                AND end_time > $4
            )
            "#,
        )
        .bind(room_id)
        .bind(STATUS_CONFIRMED)
        .bind(end_time)
        .bind(start_time)
        .fetch_one(&db.pool)
        .await
    }
}
