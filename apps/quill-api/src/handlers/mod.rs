//! HTTP handlers and route configuration.

mod auth;
mod blog;
mod drafts;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Public blog surface; writes require a bearer token
            .service(
                web::scope("/blog")
                    .service(
                        web::resource("/posts")
                            .route(web::get().to(blog::list_posts))
                            .route(web::post().to(blog::create_post)),
                    )
                    .service(
                        web::resource("/posts/{slug}")
                            .route(web::get().to(blog::get_post))
                            .route(web::patch().to(blog::update_post))
                            .route(web::delete().to(blog::delete_post)),
                    )
                    .route("/featured", web::get().to(blog::featured_posts))
                    .route("/latest", web::get().to(blog::latest_posts))
                    .route("/categories", web::get().to(blog::list_categories))
                    .route("/tags", web::get().to(blog::list_tags)),
            )
            // Authoring dashboard; every route requires a bearer token
            .service(
                web::scope("/drafts")
                    .service(
                        web::resource("")
                            .route(web::get().to(drafts::list_drafts))
                            .route(web::post().to(drafts::create_draft)),
                    )
                    .route("/categories", web::get().to(drafts::list_categories))
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(drafts::get_draft))
                            .route(web::patch().to(drafts::update_draft))
                            .route(web::delete().to(drafts::delete_draft)),
                    ),
            ),
    );
}
