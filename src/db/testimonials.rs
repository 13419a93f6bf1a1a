use sea_orm::*;
use uuid::Uuid;

use crate::models::SortOrder;
use crate::models::testimonials::{self, NewTestimonial, UpdateTestimonial};

/// Insert a new testimonial.
pub async fn insert_testimonial(
    db: &DatabaseConnection,
    input: NewTestimonial,
) -> Result<testimonials::Model, DbErr> {
    let new_testimonial = testimonials::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        role: Set(input.role),
        testimonial: Set(input.testimonial),
        rating: Set(input.rating),
        image_url: Set(input.image_url),
        created_at: Set(chrono::Utc::now()),
    };

    new_testimonial.insert(db).await
}

/// Fetch all testimonials.
pub async fn get_testimonials(
    db: &DatabaseConnection,
    sort: SortOrder,
) -> Result<Vec<testimonials::Model>, DbErr> {
    testimonials::Entity::find()
        .order_by(testimonials::Column::CreatedAt, sort.into())
        .all(db)
        .await
}

/// Fetch a single testimonial by ID.
pub async fn get_testimonial_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<testimonials::Model>, DbErr> {
    testimonials::Entity::find_by_id(id).one(db).await
}

/// Merge a patch into an existing testimonial.
pub async fn update_testimonial(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateTestimonial,
) -> Result<testimonials::Model, DbErr> {
    let testimonial = testimonials::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Testimonial not found".to_string()))?;

    let mut active: testimonials::ActiveModel = testimonial.into();
    input.apply(&mut active);

    active.update(db).await
}

/// Delete a testimonial by ID.
pub async fn delete_testimonial(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<DeleteResult, DbErr> {
    testimonials::Entity::delete_by_id(id).exec(db).await
}
