//! Black-box tests: the real router on an ephemeral port, driven by reqwest.

use catalog::{Product, ProductCatalog};
use reqwest::StatusCode;
use server::{CatalogOrchestrator, RenderSettings, build_app};
use sources::{FileSource, ProductSource};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(source: ProductSource) -> Self {
        // Same router as prod, bound to an ephemeral port
        let app = build_app(CatalogOrchestrator::new(source), RenderSettings::default());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn sample_source() -> ProductSource {
    ProductSource::from(
        ProductCatalog::from_products(vec![
            Product::new(1, "Backpack", 109.95, "men's clothing", "https://example.test/1.jpg"),
            Product::new(2, "Ring", 9.99, "jewelery", "https://example.test/2.jpg"),
            Product::new(3, "Jacket", 55.99, "men's clothing", "https://example.test/3.jpg"),
            Product::new(4, "Monitor", 599.0, "electronics", "https://example.test/4.jpg"),
        ])
        .unwrap(),
    )
}

fn broken_source() -> ProductSource {
    ProductSource::File(FileSource::new("definitely/missing/products.json"))
}

/// Titles of the rendered product cards, in page order
fn card_titles(html: &str) -> Vec<String> {
    html.split("<h3 class=\"product-title\">")
        .skip(1)
        .filter_map(|chunk| chunk.split("</h3>").next())
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn get_renders_all_products() {
    let server = TestServer::spawn(sample_source()).await;

    let res = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let html = res.text().await.unwrap();
    assert_eq!(card_titles(&html), vec!["Backpack", "Ring", "Jacket", "Monitor"]);
    assert!(html.contains("<option value=\"electronics\">Electronics</option>"));
    assert!(html.contains("4 produits sur 4"));
}

#[tokio::test]
async fn post_form_filters_and_sorts() {
    let server = TestServer::spawn(sample_source()).await;
    let client = reqwest::Client::new();

    let html = client
        .post(server.url("/"))
        .form(&[
            ("category", "men's clothing"),
            ("min_price", ""),
            ("max_price", "200"),
            ("sort", "asc"),
        ])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(card_titles(&html), vec!["Jacket", "Backpack"]);
    assert!(html.contains("<option value=\"men&#39;s clothing\" selected>"));
    // The dropdown still lists every category of the unfiltered catalog
    assert!(html.contains("<option value=\"jewelery\">Jewelery</option>"));
    assert!(html.contains("<option value=\"asc\" selected>"));
}

#[tokio::test]
async fn query_string_filters() {
    let server = TestServer::spawn(sample_source()).await;

    let html = reqwest::get(server.url("/?min_price=50&sort=desc"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(card_titles(&html), vec!["Monitor", "Backpack", "Jacket"]);
}

#[tokio::test]
async fn invalid_values_are_ignored() {
    let server = TestServer::spawn(sample_source()).await;

    let html = reqwest::get(server.url("/?min_price=cheap&max_price=-1&sort=random"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(card_titles(&html), vec!["Backpack", "Ring", "Jacket", "Monitor"]);
}

#[tokio::test]
async fn fetch_failure_renders_notice() {
    let server = TestServer::spawn(broken_source()).await;

    let res = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let html = res.text().await.unwrap();
    assert!(card_titles(&html).is_empty());
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Aucun produit disponible."));
}

#[tokio::test]
async fn json_endpoint() {
    let server = TestServer::spawn(sample_source()).await;

    let res = reqwest::get(server.url("/api/products?category=jewelery"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let products: Vec<Product> = res.json().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 2);
}

#[tokio::test]
async fn json_endpoint_reports_upstream_failure() {
    let server = TestServer::spawn(broken_source()).await;

    let res = reqwest::get(server.url("/api/products")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Failed to load products"));
}

#[tokio::test]
async fn health() {
    let server = TestServer::spawn(sample_source()).await;

    let res = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "ok");
}
