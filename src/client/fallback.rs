//! Seed data shown while the backend is unreachable.
//!
//! Ids are fixed so a cached list stays stable across reloads.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::enquiries::{self, EnquiryStatus};
use crate::models::gallery::{self, GalleryCategory};
use crate::models::testimonials::DEFAULT_ROLE;
use crate::models::{packages, services, testimonials};

fn seed_id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

pub fn services() -> Vec<services::Model> {
    let seed = [
        (
            "Herbal Facials",
            "Rejuvenating facials using natural herbs and organic ingredients for glowing skin.",
            "Starting from ₹500",
            "Facial",
            "🌿",
        ),
        (
            "Hair Care",
            "Organic hair treatments, cuts, styling, and coloring with herbal products.",
            "Starting from ₹300",
            "Hair",
            "💇",
        ),
        (
            "Bridal Makeup",
            "Complete bridal packages with mehendi, makeup, and pre-wedding treatments.",
            "Contact for price",
            "Bridal",
            "👰",
        ),
        (
            "Waxing Services",
            "Gentle herbal waxing for smooth, irritation-free skin.",
            "Starting from ₹200",
            "Waxing",
            "✨",
        ),
        (
            "Herbal Body Treatments",
            "Full body scrubs, wraps, and massages using natural herbal blends.",
            "Starting from ₹800",
            "Body",
            "🍃",
        ),
        (
            "Manicure & Pedicure",
            "Luxurious nail care with organic products and herbal soaks.",
            "Starting from ₹400",
            "Nails",
            "💅",
        ),
    ];

    seed.into_iter()
        .zip(1..)
        .map(|((title, description, price, category, icon), n)| services::Model {
            id: seed_id(n),
            title: title.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            category: category.to_string(),
            icon: Some(icon.to_string()),
            image_url: None,
            created_at: at("2024-12-01T00:00:00Z"),
        })
        .collect()
}

pub fn gallery() -> Vec<gallery::Model> {
    use GalleryCategory::*;

    let seed = [
        ("photo-1560066984-138dadb4c035", "Premium Hair Styling", Hair, "2024-12-01T00:00:00Z"),
        ("photo-1516975080664-ed2fc6a32937", "Relaxing Facial Treatment", Facial, "2024-12-05T00:00:00Z"),
        ("photo-1522335789203-aabd1fc54bc9", "Bridal Makeup Artistry", Bridal, "2024-12-10T00:00:00Z"),
        ("photo-1487412720507-e7ab37603c6f", "Natural Hair Coloring", Hair, "2024-12-12T00:00:00Z"),
        ("photo-1519415510236-718bdfcd89c8", "Herbal Glow Facial", Facial, "2024-12-14T00:00:00Z"),
        ("photo-1595476108010-b4d1f102b1b1", "Traditional Bridal Look", Bridal, "2024-12-15T00:00:00Z"),
        ("photo-1562322140-8baeececf3df", "Spa Treatment", Other, "2024-12-16T00:00:00Z"),
        ("photo-1570172619644-dfd03ed5d881", "Skin Rejuvenation", Facial, "2024-12-17T00:00:00Z"),
    ];

    // Newest first, like the gallery endpoint.
    let mut items: Vec<_> = seed
        .into_iter()
        .zip(1..)
        .map(|((photo, caption, category, created), n)| gallery::Model {
            id: seed_id(100 + n),
            image_url: format!("https://images.unsplash.com/{photo}?w=400"),
            caption: caption.to_string(),
            category,
            created_at: at(created),
        })
        .collect();
    items.reverse();
    items
}

pub fn testimonials() -> Vec<testimonials::Model> {
    let seed = [
        (
            "Priya S.",
            "The herbal facial was absolutely amazing! My skin has never felt so fresh and rejuvenated. The staff is incredibly professional and caring.",
            5,
        ),
        (
            "Anita M.",
            "Best bridal makeup experience! They made my special day even more beautiful. Highly recommend their herbal products.",
            5,
        ),
        (
            "Kavitha R.",
            "I love that they use all-natural products. The results are visible and my hair has never been healthier. Thank you, Honey Herbal!",
            5,
        ),
        (
            "Deepa K.",
            "Wonderful ambiance and excellent service. The herbal body treatment was so relaxing. Will definitely come back!",
            4,
        ),
    ];

    seed.into_iter()
        .zip(1..)
        .map(|((name, quote, rating), n)| testimonials::Model {
            id: seed_id(200 + n),
            name: name.to_string(),
            role: DEFAULT_ROLE.to_string(),
            testimonial: quote.to_string(),
            rating,
            image_url: None,
            created_at: at("2024-12-01T00:00:00Z"),
        })
        .collect()
}

pub fn packages() -> Vec<packages::Model> {
    let seed = [
        (
            "Bridal Glow Package",
            "Complete pre-wedding skincare with 5 herbal facials, body polishing, and hair spa.",
            "Save 20%",
            "2025-01-31",
        ),
        (
            "Festive Beauty Combo",
            "Facial + Manicure + Pedicure + Hair Styling at a special combo price.",
            "₹500 Off",
            "2025-01-15",
        ),
        (
            "First Visit Special",
            "Get 15% off on all services for your first visit to Honey Herbal.",
            "15% Off",
            "2025-03-31",
        ),
    ];

    seed.into_iter()
        .zip(1..)
        .map(|((title, description, discount, valid_until), n)| packages::Model {
            id: seed_id(300 + n),
            title: title.to_string(),
            description: description.to_string(),
            discount: Some(discount.to_string()),
            valid_until: day(valid_until),
            image_url: None,
            created_at: at("2024-12-01T00:00:00Z"),
        })
        .collect()
}

pub fn enquiries() -> Vec<enquiries::Model> {
    vec![
        enquiries::Model {
            id: seed_id(401),
            name: "Sneha Patel".to_string(),
            phone: "+91 99887 76655".to_string(),
            email: Some("sneha@email.com".to_string()),
            service: "Bridal Makeup".to_string(),
            message: "I am getting married in February and would like to know about your bridal packages.".to_string(),
            status: EnquiryStatus::New,
            notes: None,
            created_at: at("2024-12-18T10:30:00Z"),
        },
        enquiries::Model {
            id: seed_id(402),
            name: "Meera Sharma".to_string(),
            phone: "+91 88776 65544".to_string(),
            email: None,
            service: "Herbal Facials".to_string(),
            message: "Do you offer packages for multiple facial sessions?".to_string(),
            status: EnquiryStatus::Contacted,
            notes: Some("Called back, explained monthly package options".to_string()),
            created_at: at("2024-12-17T14:00:00Z"),
        },
        enquiries::Model {
            id: seed_id(403),
            name: "Ritu Verma".to_string(),
            phone: "+91 77665 54433".to_string(),
            email: Some("ritu.v@email.com".to_string()),
            service: "Hair Care".to_string(),
            message: "Looking for organic hair color options. What brands do you use?".to_string(),
            status: EnquiryStatus::Closed,
            notes: Some("Visited salon, did organic coloring".to_string()),
            created_at: at("2024-12-15T09:00:00Z"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique_across_resources() {
        let ids: Vec<Uuid> = services()
            .iter()
            .map(|s| s.id)
            .chain(gallery().iter().map(|g| g.id))
            .chain(testimonials().iter().map(|t| t.id))
            .chain(packages().iter().map(|p| p.id))
            .chain(enquiries().iter().map(|e| e.id))
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn gallery_seed_is_newest_first() {
        let items = gallery();
        assert_eq!(items.len(), 8);
        assert!(items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(items[0].caption, "Skin Rejuvenation");
    }

    #[test]
    fn package_dates_parse() {
        assert!(packages().iter().all(|p| p.valid_until.is_some()));
    }
}
