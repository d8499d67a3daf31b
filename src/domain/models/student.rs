use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn new(name: String, roll_number: String, class_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            roll_number,
            class_name,
            created_at: Utc::now(),
        }
    }
}
