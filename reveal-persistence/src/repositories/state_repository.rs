use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::entities::{app_state, prelude::*};
use crate::storage::StateStorage;

pub const DEFAULT_STATE_KEY: &str = "word-reveal-state";

/// SQLite-backed key-value storage holding the whole state as one JSON document
pub struct StateRepository {
    db: DatabaseConnection,
    key: String,
}

impl StateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_key(db, DEFAULT_STATE_KEY)
    }

    pub fn with_key(db: DatabaseConnection, key: &str) -> Self {
        Self {
            db,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn find_value(&self) -> Result<Option<String>> {
        let row = AppStateRow::find_by_id(self.key.clone()).one(&self.db).await?;
        Ok(row.map(|model| model.value))
    }

    pub async fn upsert_value(&self, raw: &str) -> Result<()> {
        let row = app_state::ActiveModel {
            key: ActiveValue::Set(self.key.clone()),
            value: ActiveValue::Set(raw.to_string()),
            updated_at: ActiveValue::Set(chrono::Utc::now().into()),
        };

        AppStateRow::insert(row)
            .on_conflict(
                OnConflict::column(app_state::Column::Key)
                    .update_columns([app_state::Column::Value, app_state::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl StateStorage for StateRepository {
    async fn load(&self) -> Result<Option<String>> {
        self.find_value().await
    }

    async fn save(&self, raw: &str) -> Result<()> {
        self.upsert_value(raw).await
    }
}
