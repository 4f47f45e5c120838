use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use wander_agentic::AgentOrchestrator;
use wanderwise::database::{self, DocumentStore, ItineraryRepository, UserRepository};

mod account;
mod handlers;
mod response;
mod validation;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub users: Arc<UserRepository>,
    pub itineraries: Arc<ItineraryRepository>,
    pub agent: Arc<AgentOrchestrator>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("wanderwise_web_server=info,wander_agentic=info,tower_http=debug")
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database connection
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost:5432/wanderwise".to_string());

    info!("Connecting to database: {}", database_url);
    let pool = database::connect(&database_url).await?;

    // LLM clients are built once and shared by every orchestration run
    let agent = Arc::new(AgentOrchestrator::from_env()?);

    let app_state = AppState {
        store: Arc::new(DocumentStore::new(pool.clone())),
        users: Arc::new(UserRepository::new(pool.clone())),
        itineraries: Arc::new(ItineraryRepository::new(pool)),
        agent,
    };

    // Build our application with routes
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or(8000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/api", get(handlers::root))
        .route("/api/", get(handlers::root))
        .route("/api/health", get(handlers::health_check))
        // Advisory endpoints
        .route("/api/vibe-match", post(handlers::vibe_match))
        .route("/api/smart-itinerary", post(handlers::smart_itinerary))
        .route(
            "/api/destination-suggestions",
            post(handlers::destination_suggestions),
        )
        .route(
            "/api/activity-suggestions",
            post(handlers::activity_suggestions),
        )
        .route(
            "/api/duration-recommendation",
            post(handlers::duration_recommendation),
        )
        .route("/api/analyze-review", post(handlers::analyze_review))
        // Persisted-record reads
        .route("/api/destination-reviews", get(handlers::destination_reviews))
        .route("/api/travel-insights", get(handlers::travel_insights))
        // Static lookups
        .route("/api/convert-currency", get(handlers::convert_currency))
        .route(
            "/api/destination-currency",
            get(handlers::destination_currency),
        )
        // Accounts and sessions
        .route("/api/auth/register", post(account::register))
        .route("/api/auth/login", post(account::login))
        .route("/api/auth/verify", post(account::verify))
        .route("/api/auth/logout", post(account::logout))
        // Saved itineraries
        .route("/api/itineraries/save", post(account::save_itinerary))
        .route("/api/itineraries/my", get(account::my_itineraries))
        .route(
            "/api/itineraries/:itinerary_id",
            delete(account::delete_itinerary),
        )
        // User preferences
        .route(
            "/api/user/preferences",
            get(account::get_preferences).post(account::update_preferences),
        )
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wander_agentic::LlmClient;

    /// Stub that would fail loudly if any validation-path test reached it
    struct UnreachableClient;

    #[async_trait]
    impl LlmClient for UnreachableClient {
        async fn chat(&self, _system: &str, _user: &str) -> anyhow::Result<String> {
            panic!("model client must not be reached by a rejected request");
        }

        async fn chat_json(&self, system: &str, user: &str) -> anyhow::Result<String> {
            self.chat(system, user).await
        }

        fn model_name(&self) -> &str {
            "unreachable-stub"
        }

        fn provider_name(&self) -> &str {
            "Stub"
        }
    }

    fn test_router() -> Router {
        // Lazy pool: no connection is made unless a handler runs a query,
        // which none of these validation-path tests do.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost:5432/wanderwise-test")
            .expect("lazy pool");
        let state = AppState {
            store: Arc::new(DocumentStore::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool.clone())),
            itineraries: Arc::new(ItineraryRepository::new(pool)),
            agent: Arc::new(AgentOrchestrator::with_client(Arc::new(UnreachableClient))),
        };
        create_router(state)
    }

    #[tokio::test]
    async fn test_short_review_rejected_before_orchestration() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze-review?review_text=Good")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_currency_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/convert-currency?amount=100&from_currency=USD&to_currency=XYZ")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_destination_currency_lookup() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/destination-currency?destination=Bangkok%20Thailand")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_reports_service_info() {
        let response = test_router()
            .oneshot(Request::builder().uri("/api/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
