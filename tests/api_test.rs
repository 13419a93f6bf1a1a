//! End-to-end tests of the `/api` surface against a migrated SQLite database.
//!
//! Run with: `cargo test --test api_test`
mod common;

use actix_web::{App, test};
use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};
use uuid::Uuid;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, bearer, envelope, setup};

fn created_at(item: &Value) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(item["createdAt"].as_str().expect("createdAt"))
        .expect("createdAt should be RFC 3339")
}

#[actix_web::test]
async fn test_create_without_required_fields_is_rejected() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    for path in [
        "/api/services",
        "/api/packages",
        "/api/gallery",
        "/api/testimonials",
        "/api/enquiries",
    ] {
        let req = test::TestRequest::post()
            .uri(path)
            .insert_header(bearer(&token))
            .set_json(json!({ "title": "   ", "name": "" }))
            .to_request();
        let (status, body) = envelope(test::call_service(&app, req).await).await;

        assert_eq!(status, 400, "POST {path}");
        assert_eq!(body["success"], false, "POST {path}");
        assert!(body["error"].as_str().unwrap().contains("required"), "POST {path}");
    }
}

#[actix_web::test]
async fn test_update_unknown_id_is_not_found() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();
    let missing = Uuid::new_v4();

    let patches = [
        ("services", json!({ "price": "₹999" })),
        ("packages", json!({ "discount": "10% Off" })),
        ("gallery", json!({ "caption": "Updated" })),
        ("testimonials", json!({ "rating": 4 })),
        ("enquiries", json!({ "status": "Contacted" })),
    ];

    for (resource, patch) in patches {
        let req = test::TestRequest::put()
            .uri(&format!("/api/{resource}/{missing}"))
            .insert_header(bearer(&token))
            .set_json(patch)
            .to_request();
        let (status, body) = envelope(test::call_service(&app, req).await).await;

        assert_eq!(status, 404, "PUT {resource}");
        assert_eq!(body["success"], false, "PUT {resource}");
    }
}

#[actix_web::test]
async fn test_service_create_then_get_round_trips_fields() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/services")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Herbal Facials",
            "description": "Rejuvenating facials using natural herbs.",
            "price": "Starting from ₹500",
            "category": "Facial",
            "icon": "🌿"
        }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/services/{id}"))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;

    assert_eq!(status, 200);
    let service = &body["data"];
    assert_eq!(service["title"], "Herbal Facials");
    assert_eq!(service["price"], "Starting from ₹500");
    assert_eq!(service["category"], "Facial");
    assert_eq!(service["icon"], "🌿");
    assert!(service.get("createdAt").is_some());
}

#[actix_web::test]
async fn test_service_icon_defaults_and_update_merges() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/services")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Waxing",
            "description": "Gentle herbal waxing.",
            "price": "₹200",
            "category": "Waxing"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created["data"]["icon"], "✨");
    let id = created["data"]["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/services/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "price": "₹250" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["price"], "₹250");
    assert_eq!(body["data"]["title"], "Waxing");

    // Blanking a required field is a validation error, not a silent wipe.
    let req = test::TestRequest::put()
        .uri(&format!("/api/services/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "" }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_gallery_category_filter_and_validation() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    for (caption, category) in [
        ("Premium Hair Styling", "Hair"),
        ("Relaxing Facial", "Facial"),
        ("Natural Hair Coloring", "Hair"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/gallery")
            .insert_header(bearer(&token))
            .set_json(json!({ "caption": caption, "category": category }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/gallery?category=Hair")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["category"] == "Hair"));
    // Placeholder image when none was given.
    assert!(items.iter().all(|i| i["imageUrl"].as_str().unwrap().starts_with("https://")));

    let req = test::TestRequest::get()
        .uri("/api/gallery?category=All")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/api/gallery?category=Nails")
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_enquiry_list_sort_order() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    for name in ["Sneha", "Meera", "Ritu"] {
        let req = test::TestRequest::post()
            .uri("/api/enquiries")
            .set_json(json!({
                "name": name,
                "phone": "+91 99887 76655",
                "service": "Bridal Makeup",
                "message": "Do you have bridal packages?"
            }))
            .to_request();
        let (status, body) = envelope(test::call_service(&app, req).await).await;
        assert_eq!(status, 201);
        assert_eq!(body["data"]["status"], "New");
    }

    let req = test::TestRequest::get()
        .uri("/api/enquiries")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let newest_first: Vec<_> = body["data"].as_array().unwrap().iter().map(created_at).collect();
    assert_eq!(newest_first.len(), 3);
    assert!(newest_first.windows(2).all(|w| w[0] >= w[1]));

    let req = test::TestRequest::get()
        .uri("/api/enquiries?sort=oldest")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let oldest_first: Vec<_> = body["data"].as_array().unwrap().iter().map(created_at).collect();
    assert!(oldest_first.windows(2).all(|w| w[0] <= w[1]));
}

#[actix_web::test]
async fn test_enquiry_status_update_and_filter() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/enquiries")
        .set_json(json!({
            "name": "Meera Sharma",
            "phone": "+91 88776 65544",
            "service": "Herbal Facials",
            "message": "Do you offer packages for multiple facial sessions?"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/enquiries/{id}"))
        .insert_header(bearer(&token))
        .set_json(json!({ "status": "Contacted", "notes": "Called back" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["status"], "Contacted");
    assert_eq!(body["data"]["notes"], "Called back");

    let req = test::TestRequest::get()
        .uri("/api/enquiries?status=New")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/enquiries?status=Pending")
        .insert_header(bearer(&token))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_enquiry_delete_requires_admin_password() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/enquiries")
        .set_json(json!({
            "name": "Ritu Verma",
            "phone": "+91 77665 54433",
            "service": "Hair Care",
            "message": "Looking for organic hair color options."
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/enquiries/{id}");

    // Wrong password: 401 and the row stays.
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({ "password": "letmein" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    // Right password: gone.
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({ "password": ADMIN_PASSWORD }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Enquiry deleted successfully");

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    // Second delete is a 404, not a crash.
    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({ "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_delete_twice_is_not_found() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .insert_header(bearer(&token))
        .set_json(json!({ "clientName": "Priya S.", "quote": "Amazing herbal facial!" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["name"], "Priya S.");
    assert_eq!(body["data"]["role"], "Client");
    assert_eq!(body["data"]["rating"], 5);
    let uri = format!("/api/testimonials/{}", body["data"]["id"].as_str().unwrap());

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let req = test::TestRequest::delete()
        .uri(&uri)
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_testimonial_rating_out_of_range_is_rejected() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/testimonials")
        .insert_header(bearer(&token))
        .set_json(json!({ "name": "Deepa K.", "testimonial": "Lovely", "rating": 6 }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_package_dates_and_clearable_fields() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::post()
        .uri("/api/packages")
        .insert_header(bearer(&token))
        .set_json(json!({
            "title": "Bridal Glow Package",
            "description": "Five herbal facials, body polishing and hair spa.",
            "discount": "Save 20%",
            "validUntil": "2025-01-31"
        }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 201);
    assert_eq!(body["data"]["validUntil"], "2025-01-31");
    let uri = format!("/api/packages/{}", body["data"]["id"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({ "discount": "", "validUntil": "" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert!(body["data"]["discount"].is_null());
    assert!(body["data"]["validUntil"].is_null());
    assert_eq!(body["data"]["title"], "Bridal Glow Package");

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&token))
        .set_json(json!({ "validUntil": "next tuesday" }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_malformed_requests_use_the_envelope() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/enquiries")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid request body");

    let req = test::TestRequest::get()
        .uri("/api/services/not-a-uuid")
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_admin_routes_require_a_session() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/enquiries").to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);

    let req = test::TestRequest::post()
        .uri("/api/services")
        .insert_header(bearer("forged.token.value"))
        .set_json(json!({
            "title": "Hair Care",
            "description": "Cuts",
            "price": "₹300",
            "category": "Hair"
        }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);

    // Public reads need no token.
    let req = test::TestRequest::get().uri("/api/services").to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_login_me_and_logout() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": "wrong" }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
    assert_eq!(body["error"], "Invalid email or password");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["user"]["email"], ADMIN_EMAIL);
    assert!(body["data"]["expiresAt"].is_string());
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["role"], "admin");

    let req = test::TestRequest::post()
        .uri("/api/auth/logout")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    // The revoked token no longer opens admin routes.
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
}

#[actix_web::test]
async fn test_settings_default_then_merge() {
    let ctx = setup().await;
    let app = test::init_service(App::new().configure(|cfg| ctx.state.configure(cfg))).await;
    let token = ctx.admin_token();

    let req = test::TestRequest::get().uri("/api/settings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["businessName"], "Honey Herbal Beauty Parlor");
    assert!(body["data"]["socialLinks"].is_object());

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .insert_header(bearer(&token))
        .set_json(json!({
            "phone": "+91 90000 00000",
            "socialLinks": { "instagram": "https://instagram.com/honeyherbal.new" }
        }))
        .to_request();
    let (status, body) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["phone"], "+91 90000 00000");
    assert_eq!(body["data"]["businessName"], "Honey Herbal Beauty Parlor");

    let req = test::TestRequest::get().uri("/api/settings").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["phone"], "+91 90000 00000");
    assert_eq!(
        body["data"]["socialLinks"]["instagram"],
        "https://instagram.com/honeyherbal.new"
    );

    // POST is accepted too, and a blank business name is not.
    let req = test::TestRequest::post()
        .uri("/api/settings")
        .insert_header(bearer(&token))
        .set_json(json!({ "businessName": " " }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 400);

    let req = test::TestRequest::put()
        .uri("/api/settings")
        .set_json(json!({ "phone": "+91 1" }))
        .to_request();
    let (status, _) = envelope(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
}
