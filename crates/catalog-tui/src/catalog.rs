use catalog_search::Searchable;
use log::{debug, warn};
use ratatui::widgets::Row;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Price shown when the source record carries a malformed price field.
/// The record itself is kept; only the price falls back.
pub const PRICE_FALLBACK: &str = "$0.00";

/// Errors raised while loading or mapping the catalog.
///
/// Both are recoverable: `SourceUnavailable` leaves the store in its
/// previous state, `Format` downgrades a single field to its fallback.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("malformed price field: {0}")]
    Format(String),
}

/// One sellable item as the viewer uses it. Built once per load from a
/// raw source record, immutable afterwards; the whole catalog is replaced
/// wholesale on reload.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: String,
    /// Searchable key. Absent names are allowed and excluded from matching.
    pub name: Option<String>,
    /// Pre-formatted display price, e.g. "$24.90".
    pub price: String,
    pub image: String,
    pub discount: Option<String>,
}

impl Searchable for CatalogItem {
    fn search_key(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Raw record shape served by the catalog endpoint.
///
/// `id` and `discounted_price` are decoded as loose JSON values because
/// the endpoint is not strict about number-vs-string; mapping normalizes
/// them into display strings.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub discounted_price: Value,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub discount: Option<String>,
}

/// Owned catalog container: replaced wholesale on load, read by every
/// search. Insertion order is source order and is what tie-breaking in
/// the matcher falls back to.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
}

impl CatalogStore {
    pub fn replace(&mut self, items: Vec<CatalogItem>) {
        self.items = items;
    }

    pub fn current(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format a raw price value as "$" plus exactly two decimal places.
///
/// Accepts JSON numbers and numeric strings; everything else (including
/// NaN/infinite values) is a `Format` error so the caller can decide on
/// a fallback instead of rendering garbage.
pub fn format_price(raw: &Value) -> Result<String, CatalogError> {
    let amount = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match amount {
        Some(a) if a.is_finite() => Ok(format!("${a:.2}")),
        _ => Err(CatalogError::Format(raw.to_string())),
    }
}

fn format_id(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Map one raw record into a catalog item.
///
/// A malformed price is logged and downgraded to [`PRICE_FALLBACK`];
/// a missing or empty image list falls back to the configured placeholder.
pub fn map_record(record: RawRecord, placeholder_image: &str) -> CatalogItem {
    let id = format_id(&record.id);

    let price = match format_price(&record.discounted_price) {
        Ok(price) => price,
        Err(err) => {
            warn!("record {id:?}: {err}, using {PRICE_FALLBACK}");
            PRICE_FALLBACK.to_string()
        }
    };

    let image = record
        .images
        .into_iter()
        .next()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| placeholder_image.to_string());

    CatalogItem {
        id,
        name: record.title,
        price,
        image,
        discount: record.discount,
    }
}

pub fn map_records(records: Vec<RawRecord>, placeholder_image: &str) -> Vec<CatalogItem> {
    records
        .into_iter()
        .map(|record| map_record(record, placeholder_image))
        .collect()
}

/// Fetch the catalog endpoint and map its records.
///
/// Transport failures and non-2xx statuses are both `SourceUnavailable`;
/// the caller keeps its previous catalog (empty on first load) and reports
/// the failure instead of crashing into rendering code.
pub async fn fetch_catalog(
    client: &reqwest::Client,
    url: &str,
    placeholder_image: &str,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CatalogError::SourceUnavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::SourceUnavailable(format!(
            "{url} returned status {status}"
        )));
    }

    let records: Vec<RawRecord> = response
        .json()
        .await
        .map_err(|e| CatalogError::SourceUnavailable(format!("invalid response body: {e}")))?;

    debug!("fetched {} records from {url}", records.len());

    Ok(map_records(records, placeholder_image))
}

impl From<&CatalogItem> for Row<'static> {
    fn from(val: &CatalogItem) -> Self {
        use ratatui::widgets::Cell;

        Row::new(vec![
            Cell::from(val.id.clone()),
            Cell::from(val.name.clone().unwrap_or_else(|| "(unnamed)".to_string())),
            Cell::from(val.price.clone()),
            Cell::from(val.discount.clone().unwrap_or_default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PLACEHOLDER: &str = "https://via.placeholder.com/150";

    fn record(value: Value) -> RawRecord {
        serde_json::from_value(value).expect("record fixture should deserialize")
    }

    #[test]
    fn test_map_record_full() {
        let item = map_record(
            record(json!({
                "id": 7,
                "title": "Red Shirt",
                "discounted_price": 24.9,
                "images": ["https://img.example/red-shirt.jpg", "https://img.example/alt.jpg"],
                "discount": "20% off"
            })),
            PLACEHOLDER,
        );

        assert_eq!(item.id, "7");
        assert_eq!(item.name.as_deref(), Some("Red Shirt"));
        assert_eq!(item.price, "$24.90");
        assert_eq!(item.image, "https://img.example/red-shirt.jpg");
        assert_eq!(item.discount.as_deref(), Some("20% off"));
    }

    #[test]
    fn test_empty_images_falls_back_to_placeholder() {
        let item = map_record(
            record(json!({"id": 1, "title": "Shirt", "discounted_price": 10, "images": []})),
            PLACEHOLDER,
        );
        assert_eq!(item.image, PLACEHOLDER);

        // Field absent entirely
        let item = map_record(
            record(json!({"id": 2, "title": "Shirt", "discounted_price": 10})),
            PLACEHOLDER,
        );
        assert_eq!(item.image, PLACEHOLDER);
    }

    #[test]
    fn test_price_always_has_two_decimals() {
        assert_eq!(format_price(&json!(10)).unwrap(), "$10.00");
        assert_eq!(format_price(&json!(24.9)).unwrap(), "$24.90");
        assert_eq!(format_price(&json!(2.999)).unwrap(), "$3.00");
        assert_eq!(format_price(&json!("19.5")).unwrap(), "$19.50");
    }

    #[test]
    fn test_malformed_price_is_a_format_error() {
        assert!(matches!(
            format_price(&json!("not a number")),
            Err(CatalogError::Format(_))
        ));
        assert!(matches!(format_price(&json!(null)), Err(CatalogError::Format(_))));
        assert!(matches!(
            format_price(&json!({"amount": 3})),
            Err(CatalogError::Format(_))
        ));
    }

    #[test]
    fn test_malformed_price_maps_to_fallback_without_dropping_record() {
        let item = map_record(
            record(json!({"id": 3, "title": "Shirt", "discounted_price": "n/a", "images": []})),
            PLACEHOLDER,
        );
        assert_eq!(item.price, PRICE_FALLBACK);
        assert_eq!(item.name.as_deref(), Some("Shirt"));
    }

    #[test]
    fn test_missing_title_yields_unsearchable_item() {
        let item = map_record(
            record(json!({"id": 4, "discounted_price": 5, "images": []})),
            PLACEHOLDER,
        );
        assert_eq!(item.name, None);
        assert_eq!(item.search_key(), None);
    }

    async fn serve_once(response: &'static [u8]) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response).await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_http_500_is_source_unavailable() {
        let addr =
            serve_once(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n").await;

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/clothing");
        let err = fetch_catalog(&client, &url, PLACEHOLDER).await.unwrap_err();

        assert!(matches!(err, CatalogError::SourceUnavailable(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_source_unavailable() {
        // Bind then drop the listener so the port is known to refuse
        let addr = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/clothing");
        let err = fetch_catalog(&client, &url, PLACEHOLDER).await.unwrap_err();

        assert!(matches!(err, CatalogError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_successful_fetch_maps_records() {
        const BODY: &str = r#"[{"id":1,"title":"Red Shirt","discounted_price":24.9,"images":[]}]"#;
        let response: &'static [u8] = Box::leak(
            format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
                BODY.len(),
                BODY
            )
            .into_bytes()
            .into_boxed_slice(),
        );
        let addr = serve_once(response).await;

        let client = reqwest::Client::new();
        let url = format!("http://{addr}/clothing");
        let items = fetch_catalog(&client, &url, PLACEHOLDER).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Red Shirt"));
        assert_eq!(items[0].price, "$24.90");
        assert_eq!(items[0].image, PLACEHOLDER);
    }

    #[test]
    fn test_store_replace_and_order() {
        let mut store = CatalogStore::default();
        assert!(store.is_empty());

        let items = map_records(
            vec![
                record(json!({"id": 1, "title": "b", "discounted_price": 1, "images": []})),
                record(json!({"id": 2, "title": "a", "discounted_price": 2, "images": []})),
            ],
            PLACEHOLDER,
        );
        store.replace(items);

        assert_eq!(store.len(), 2);
        // Source order preserved, no re-sorting on load
        assert_eq!(store.current()[0].name.as_deref(), Some("b"));
        assert_eq!(store.current()[1].name.as_deref(), Some("a"));
    }
}
