use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Delivery state of a stored submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "received")]
    Received,
    #[sea_orm(string_value = "email_sent")]
    EmailSent,
    #[sea_orm(string_value = "email_failed")]
    EmailFailed,
    #[sea_orm(string_value = "email_disabled")]
    EmailDisabled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_submissions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub timestamp: ChronoDateTimeUtc,
    pub status: DeliveryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
