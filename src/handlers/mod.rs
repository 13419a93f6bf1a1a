pub mod auth;
pub mod enquiries;
pub mod gallery;
pub mod packages;
pub mod services;
pub mod settings;
pub mod testimonials;
pub mod uploads;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Admin session ──
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::post().to(auth::logout))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Services (reads public, writes admin) ──
    cfg.service(
        web::scope("/services")
            .route("", web::get().to(services::get_services))
            .route("", web::post().to(services::create_service))
            .route("/{id}", web::get().to(services::get_service))
            .route("/{id}", web::put().to(services::update_service))
            .route("/{id}", web::delete().to(services::delete_service)),
    );

    // ── Packages / offers ──
    cfg.service(
        web::scope("/packages")
            .route("", web::get().to(packages::get_packages))
            .route("", web::post().to(packages::create_package))
            .route("/{id}", web::get().to(packages::get_package))
            .route("/{id}", web::put().to(packages::update_package))
            .route("/{id}", web::delete().to(packages::delete_package)),
    );

    // ── Gallery (upload must be registered before /{id}) ──
    cfg.service(
        web::scope("/gallery")
            .route("", web::get().to(gallery::get_items))
            .route("", web::post().to(gallery::create_item))
            .route("/upload", web::post().to(uploads::upload_gallery_image))
            .route("/{id}", web::get().to(gallery::get_item))
            .route("/{id}", web::put().to(gallery::update_item))
            .route("/{id}", web::delete().to(gallery::delete_item)),
    );

    // ── Testimonials ──
    cfg.service(
        web::scope("/testimonials")
            .route("", web::get().to(testimonials::get_testimonials))
            .route("", web::post().to(testimonials::create_testimonial))
            .route("/upload", web::post().to(uploads::upload_testimonial_image))
            .route("/{id}", web::get().to(testimonials::get_testimonial))
            .route("/{id}", web::put().to(testimonials::update_testimonial))
            .route("/{id}", web::delete().to(testimonials::delete_testimonial)),
    );

    // ── Enquiries (create public, everything else admin) ──
    cfg.service(
        web::scope("/enquiries")
            .route("", web::get().to(enquiries::get_enquiries))
            .route("", web::post().to(enquiries::create_enquiry))
            .route("/{id}", web::get().to(enquiries::get_enquiry))
            .route("/{id}", web::put().to(enquiries::update_enquiry))
            .route("/{id}", web::delete().to(enquiries::delete_enquiry)),
    );

    // ── Site settings singleton ──
    cfg.service(
        web::resource("/settings")
            .route(web::get().to(settings::get_settings))
            .route(web::put().to(settings::update_settings))
            .route(web::post().to(settings::update_settings)),
    );
}
