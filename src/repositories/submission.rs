//! Contact submission repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::entities::contact_submission::{self, DeliveryStatus};

/// Outcome of the notification attempt, recorded on the submission row
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryUpdate {
    Sent { email_id: Option<String> },
    Failed { error: String, status_code: Option<u16> },
    Disabled { note: String },
}

/// Repository for contact submission database operations.
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Insert a new submission with status `received`.
    pub async fn insert<C>(
        conn: &C,
        id: &str,
        name: &str,
        email: &str,
        message: &str,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Result<contact_submission::Model>
    where
        C: ConnectionTrait,
    {
        let active = contact_submission::ActiveModel {
            id: Set(id.to_string()),
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            message: Set(message.to_string()),
            timestamp: Set(timestamp),
            status: Set(DeliveryStatus::Received),
            error: Set(None),
            status_code: Set(None),
            email_id: Set(None),
            note: Set(None),
        };

        Ok(active.insert(conn).await?)
    }

    /// Record the notification outcome on an existing submission.
    pub async fn update_delivery<C>(
        conn: &C,
        id: &str,
        update: DeliveryUpdate,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Result<contact_submission::Model>
    where
        C: ConnectionTrait,
    {
        let existing = contact_submission::Entity::find_by_id(id.to_string())
            .one(conn)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Submission not found: {}", id))?;

        let mut active: contact_submission::ActiveModel = existing.into();
        active.timestamp = Set(timestamp);
        match update {
            DeliveryUpdate::Sent { email_id } => {
                active.status = Set(DeliveryStatus::EmailSent);
                active.email_id = Set(email_id);
            }
            DeliveryUpdate::Failed { error, status_code } => {
                active.status = Set(DeliveryStatus::EmailFailed);
                active.error = Set(Some(error));
                active.status_code = Set(status_code.map(i32::from));
            }
            DeliveryUpdate::Disabled { note } => {
                active.status = Set(DeliveryStatus::EmailDisabled);
                active.note = Set(Some(note));
            }
        }

        Ok(active.update(conn).await?)
    }

    /// Get all submissions, newest first.
    pub async fn get_all_newest_first<C>(conn: &C) -> Result<Vec<contact_submission::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(contact_submission::Entity::find()
            .order_by_desc(contact_submission::Column::Timestamp)
            .order_by_desc(contact_submission::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single submission by id.
    pub async fn get_by_id<C>(conn: &C, id: &str) -> Result<Option<contact_submission::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(contact_submission::Entity::find_by_id(id.to_string()).one(conn).await?)
    }

    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(contact_submission::Entity::find().count(conn).await?)
    }
}
