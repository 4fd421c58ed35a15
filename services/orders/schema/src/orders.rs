use sea_orm::entity::prelude::*;

/// Customer order owned by a vendor.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub status: String,
    pub total_amount: i64,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub place_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_notifications::Entity")]
    OrderNotifications,
    #[sea_orm(has_one = "super::external_api_logs::Entity")]
    ExternalApiLog,
}

impl Related<super::order_notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderNotifications.def()
    }
}

impl Related<super::external_api_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExternalApiLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
