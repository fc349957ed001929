// File: services/wellbook_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use wellbook_booking::routes as booking_routes;
use wellbook_common::services::ServiceFactory;
use wellbook_config::load_config;

mod service_factory;
use service_factory::WellbookServiceFactory;

#[tokio::main]
async fn main() {
    // .env first so RUST_LOG can live there
    wellbook_config::ensure_dotenv_loaded();
    wellbook_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let factory = WellbookServiceFactory::new(config.clone())
        .await
        .expect("Failed to initialize services");

    let booking_router = booking_routes(
        factory.meeting_service(),
        factory.notification_service(),
        factory.slot_store(),
    );

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new()
        .route("/", get(|| async { "Zoom & Email API is running ✅" }))
        .merge(booking_router)
        .layer(CorsLayer::permissive());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        use wellbook_booking::doc::BookingApiDoc;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Wellbook API",
                version = "0.1.0",
                description = "Wellbook booking service API docs"
            ),
            components(),
            tags( (name = "Wellbook", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        println!("📖 Adding Swagger UI at /docs");

        let swagger_ui = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
