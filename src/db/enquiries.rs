use sea_orm::*;
use uuid::Uuid;

use crate::models::SortOrder;
use crate::models::enquiries::{self, EnquiryStatus, NewEnquiry, UpdateEnquiry};

/// Insert a new enquiry. Every enquiry starts out as `New`.
pub async fn insert_enquiry(
    db: &DatabaseConnection,
    input: NewEnquiry,
) -> Result<enquiries::Model, DbErr> {
    let new_enquiry = enquiries::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        phone: Set(input.phone),
        email: Set(input.email),
        service: Set(input.service),
        message: Set(input.message),
        status: Set(EnquiryStatus::New),
        notes: Set(None),
        created_at: Set(chrono::Utc::now()),
    };

    new_enquiry.insert(db).await
}

/// Fetch enquiries, optionally restricted to one status.
pub async fn get_enquiries(
    db: &DatabaseConnection,
    status: Option<EnquiryStatus>,
    sort: SortOrder,
) -> Result<Vec<enquiries::Model>, DbErr> {
    let mut query = enquiries::Entity::find();
    if let Some(status) = status {
        query = query.filter(enquiries::Column::Status.eq(status));
    }
    query
        .order_by(enquiries::Column::CreatedAt, sort.into())
        .all(db)
        .await
}

/// Fetch a single enquiry by ID.
pub async fn get_enquiry_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<enquiries::Model>, DbErr> {
    enquiries::Entity::find_by_id(id).one(db).await
}

/// Update status and/or notes of an enquiry.
pub async fn update_enquiry(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateEnquiry,
) -> Result<enquiries::Model, DbErr> {
    let enquiry = enquiries::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Enquiry not found".to_string()))?;

    let mut active: enquiries::ActiveModel = enquiry.into();
    input.apply(&mut active);

    active.update(db).await
}

/// Delete an enquiry by ID.
pub async fn delete_enquiry(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    enquiries::Entity::delete_by_id(id).exec(db).await
}
