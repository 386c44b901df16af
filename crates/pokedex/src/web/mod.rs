use crate::catalog::CatalogClient;
use crate::prelude::{eprintln, *};
use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use pokedex_core::detail::build_detail;
use pokedex_core::listing::{build_listing, SortOrder};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod html;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "POKEDEX_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "POKEDEX_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

/// Shared, read-only state of the web server
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    /// Number of records fetched for the listing page
    pub limit: usize,
}

/// Query string of the listing page
#[derive(Debug, Default, serde::Deserialize)]
pub struct ListingParams {
    pub q: Option<String>,
    pub sort: Option<String>,
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);

    let state = AppState {
        catalog: CatalogClient::from_global(&global),
        limit: global.limit,
    };

    if global.verbose {
        eprintln!("Catalog API base: {}", state.catalog.base_url());
        eprintln!("Pokedex listening on http://{}", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Build the application router: listing at `/`, detail at `/pokemon/{name}`
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(listing_handler))
        .route("/pokemon/{name}", get(detail_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .with_state(Arc::new(state))
}

async fn listing_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Response {
    let records = match state.catalog.fetch_listing(state.limit).await {
        Ok(records) => records,
        Err(err) => return catalog_error_response(&err),
    };

    let query = params.q.unwrap_or_default();
    let order = SortOrder::from_param(params.sort.as_deref());
    let page = build_listing(&records, &query, order);

    log::debug!(
        "Rendering listing: query={:?} order={:?} matches={}",
        page.query,
        page.order,
        page.cards.len()
    );

    Html(html::render_listing(&page)).into_response()
}

async fn detail_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Response {
    match state.catalog.fetch_detail(&name).await {
        Ok((pokemon, color)) => {
            Html(html::render_detail(&build_detail(&pokemon, &color))).into_response()
        }
        Err(err) if err.is_not_found() => {
            log::info!("No record named {name:?}");
            error_page(
                StatusCode::NOT_FOUND,
                "Not found",
                &format!("There is no Pokémon named \"{name}\"."),
            )
        }
        Err(err) => catalog_error_response(&err),
    }
}

async fn health_handler() -> StatusCode {
    StatusCode::OK
}

fn catalog_error_response(err: &Error) -> Response {
    log::warn!("Catalog request failed: {err}");
    error_page(
        StatusCode::BAD_GATEWAY,
        "Catalog unavailable",
        "The Pokémon catalog could not be reached. Please try again later.",
    )
}

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    (status, Html(html::render_error(title, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{unreachable_base, FakeCatalog};

    struct TestServer {
        base_url: String,
        handle: tokio::task::JoinHandle<()>,
    }

    impl TestServer {
        async fn spawn(catalog_base: &str) -> Self {
            let app = router(AppState {
                catalog: CatalogClient::new(catalog_base),
                limit: 100,
            });
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("failed to bind ephemeral port");
            let base_url = format!("http://{}", listener.local_addr().unwrap());

            let handle = tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self { base_url, handle }
        }

        async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
            let res = reqwest::get(format!("{}{}", self.base_url, path))
                .await
                .unwrap();
            let status = res.status();
            (status, res.text().await.unwrap())
        }
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    fn position(body: &str, needle: &str) -> usize {
        body.find(needle)
            .unwrap_or_else(|| panic!("{needle} not found"))
    }

    #[tokio::test]
    async fn test_listing_renders_all_records() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert!(body.contains("Bulbasaur"));
        assert!(body.contains("Ivysaur"));
        assert!(body.contains("Venusaur"));
        assert!(body.contains("detail/003.png"));
    }

    #[tokio::test]
    async fn test_listing_filters_by_query() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/?q=IVY").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert!(body.contains("#002"));
        assert!(body.contains("href=\"/pokemon/ivysaur\""));
        assert!(!body.contains("Bulbasaur"));
        assert!(!body.contains("Venusaur"));
    }

    #[tokio::test]
    async fn test_listing_query_keeps_surrounding_whitespace() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/?q=%20ivy").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert!(!body.contains("Ivysaur"));
        assert!(body.contains("No Pok&eacute;mon match your search."));

        let (_, body) = server.get("/?q=%20%20").await;
        assert!(!body.contains("Bulbasaur"));
        assert!(!body.contains("Venusaur"));
        assert!(body.contains("No Pok&eacute;mon match your search."));
    }

    #[tokio::test]
    async fn test_listing_sorts_descending() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (_, body) = server.get("/?sort=desc").await;
        assert!(position(&body, "Venusaur") < position(&body, "Ivysaur"));
        assert!(position(&body, "Ivysaur") < position(&body, "Bulbasaur"));
        assert!(body.contains("href=\"/?sort=asc\""));
    }

    #[tokio::test]
    async fn test_listing_ignores_unknown_sort() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/?sort=sideways").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert!(position(&body, "Bulbasaur") < position(&body, "Venusaur"));
    }

    #[tokio::test]
    async fn test_detail_renders_record() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/pokemon/ivysaur").await;
        assert_eq!(status, reqwest::StatusCode::OK);
        assert!(body.contains("Ivysaur"));
        assert!(body.contains("#002"));
        assert!(body.contains("1.0 m"));
        assert!(body.contains("13.0 kg"));
        assert!(body.contains("background-color: green"));
        assert!(body.contains("<p class=\"stat-label\">ATK</p>"));
        assert!(body.contains("dream-world/2.svg"));
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/pokemon/missingno").await;
        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        assert!(body.contains("Not found"));
        assert!(body.contains("missingno"));
    }

    #[tokio::test]
    async fn test_detail_missing_species_is_bad_gateway() {
        let catalog = FakeCatalog::spawn().await;
        let server = TestServer::spawn(&catalog.base_url).await;

        let (status, body) = server.get("/pokemon/ghostly").await;
        assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
        assert!(body.contains("Catalog unavailable"));
    }

    #[tokio::test]
    async fn test_catalog_down_renders_fallback() {
        let server = TestServer::spawn(&unreachable_base().await).await;

        let (status, body) = server.get("/").await;
        assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
        assert!(body.contains("Catalog unavailable"));

        let (status, _) = server.get("/pokemon/ivysaur").await;
        assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_health() {
        let server = TestServer::spawn(&unreachable_base().await).await;

        let (status, _) = server.get("/health").await;
        assert_eq!(status, reqwest::StatusCode::OK);
    }
}
