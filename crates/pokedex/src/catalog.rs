use crate::prelude::Error;
use pokedex_core::catalog::{resolve_color, NamedResource, Pokemon, ResourceList, Species};
use serde::de::DeserializeOwned;

pub const DEFAULT_CATALOG_BASE: &str = "https://pokeapi.co/api/v2";

/// HTTP client for the catalog API
///
/// Every call is a single GET with no caching and no retries.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_global(global: &crate::Global) -> Self {
        Self::new(&global.catalog_base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first `limit` summary records in upstream order
    pub async fn fetch_listing(&self, limit: usize) -> Result<Vec<NamedResource>, Error> {
        let url = format!("{}/pokemon?limit={limit}", self.base_url);
        let list: ResourceList = self.get_json(&url).await?;

        log::debug!("Fetched {} summary records", list.results.len());

        Ok(list.results)
    }

    /// Fetch one full record by name
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, Error> {
        let url = format!("{}/pokemon/{}", self.base_url, urlencoding::encode(name));
        self.get_json(&url).await
    }

    /// Fetch a species record from the reference URL embedded in a [`Pokemon`]
    pub async fn fetch_species(&self, url: &str) -> Result<Species, Error> {
        self.get_json(url).await
    }

    /// Fetch a record and then its species, returning the record and its resolved color
    ///
    /// The species request depends on the first response, so the two run
    /// one after the other. A missing species is reported as an upstream
    /// status error rather than [`Error::NotFound`], which is reserved for
    /// the record itself.
    pub async fn fetch_detail(&self, name: &str) -> Result<(Pokemon, String), Error> {
        let pokemon = self.fetch_pokemon(name).await?;

        let species = match self.fetch_species(&pokemon.species.url).await {
            Ok(species) => species,
            Err(Error::NotFound(url)) => return Err(Error::Status { status: 404, url }),
            Err(err) => return Err(err),
        };

        Ok((pokemon, resolve_color(&species)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_string()));
        }

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    /// Fake catalog serving a handful of records on an ephemeral port
    pub(crate) struct FakeCatalog {
        pub base_url: String,
        handle: tokio::task::JoinHandle<()>,
    }

    impl FakeCatalog {
        pub(crate) async fn spawn() -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("failed to bind ephemeral port");
            let base_url = format!("http://{}", listener.local_addr().unwrap());

            let app = Router::new()
                .route("/pokemon", get(list))
                .route("/pokemon/{name}", get(pokemon))
                .route("/pokemon-species/{id}", get(species))
                .with_state(base_url.clone());

            let handle = tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self { base_url, handle }
        }
    }

    impl Drop for FakeCatalog {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    async fn list(State(base): State<String>) -> Json<serde_json::Value> {
        Json(json!({
            "count": 3,
            "results": [
                {"name": "bulbasaur", "url": format!("{base}/pokemon/1/")},
                {"name": "ivysaur", "url": format!("{base}/pokemon/2/")},
                {"name": "venusaur", "url": format!("{base}/pokemon/3/")}
            ]
        }))
    }

    async fn pokemon(
        State(base): State<String>,
        Path(name): Path<String>,
    ) -> axum::response::Response {
        match name.as_str() {
            "ivysaur" => Json(json!({
                "id": 2,
                "name": "ivysaur",
                "height": 10,
                "weight": 130,
                "abilities": [{"ability": {"name": "overgrow", "url": format!("{base}/ability/65/")}}],
                "types": [
                    {"slot": 1, "type": {"name": "grass", "url": format!("{base}/type/12/")}},
                    {"slot": 2, "type": {"name": "poison", "url": format!("{base}/type/4/")}}
                ],
                "stats": [
                    {"base_stat": 60, "effort": 0, "stat": {"name": "hp", "url": format!("{base}/stat/1/")}},
                    {"base_stat": 62, "effort": 0, "stat": {"name": "attack", "url": format!("{base}/stat/2/")}}
                ],
                "species": {"name": "ivysaur", "url": format!("{base}/pokemon-species/2")}
            }))
            .into_response(),
            "ghostly" => Json(json!({
                "id": 999,
                "name": "ghostly",
                "height": 1,
                "weight": 1,
                "types": [],
                "stats": [],
                "species": {"name": "ghostly", "url": format!("{base}/pokemon-species/999")}
            }))
            .into_response(),
            "broken" => (StatusCode::OK, "not json").into_response(),
            _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        }
    }

    async fn species(Path(id): Path<u32>) -> axum::response::Response {
        match id {
            2 => Json(json!({"id": 2, "color": {"name": "green"}})).into_response(),
            _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        }
    }

    /// Base URL of a port nothing listens on
    pub(crate) async fn unreachable_base() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_fetch_listing() {
        let fake = FakeCatalog::spawn().await;
        let client = CatalogClient::new(&fake.base_url);

        let records = client.fetch_listing(100).await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[tokio::test]
    async fn test_fetch_detail_resolves_color() {
        let fake = FakeCatalog::spawn().await;
        let client = CatalogClient::new(&fake.base_url);

        let (pokemon, color) = client.fetch_detail("ivysaur").await.unwrap();
        assert_eq!(pokemon.id, 2);
        assert_eq!(pokemon.types.len(), 2);
        assert_eq!(color, "green");
    }

    #[tokio::test]
    async fn test_fetch_pokemon_not_found() {
        let fake = FakeCatalog::spawn().await;
        let client = CatalogClient::new(&fake.base_url);

        let err = client.fetch_pokemon("missingno").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_detail_missing_species_is_not_not_found() {
        let fake = FakeCatalog::spawn().await;
        let client = CatalogClient::new(&fake.base_url);

        let err = client.fetch_detail("ghostly").await.unwrap_err();
        assert!(matches!(err, Error::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_pokemon_malformed_json() {
        let fake = FakeCatalog::spawn().await;
        let client = CatalogClient::new(&fake.base_url);

        let err = client.fetch_pokemon("broken").await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_fetch_listing_network_error() {
        let client = CatalogClient::new(&unreachable_base().await);

        let err = client.fetch_listing(100).await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = CatalogClient::new("https://pokeapi.co/api/v2/");
        assert_eq!(client.base_url(), DEFAULT_CATALOG_BASE);
    }
}
