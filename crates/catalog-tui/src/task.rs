/// Background task system for handling slow operations without blocking the UI
use catalog_search::{DEFAULT_MAX_DISTANCE, rank_by_distance};
use log::{debug, error};
use tokio::sync::mpsc;

use crate::catalog::{CatalogItem, fetch_catalog};

/// Results from background task execution
/// These are sent back to the main loop and converted to Actions
#[derive(Debug)]
pub enum TaskResult {
    /// Catalog fetch finished (mapped items or error text)
    CatalogLoaded(Result<Vec<CatalogItem>, String>),

    /// A delayed search ran to completion
    SearchDone {
        seq: u64,
        results: Vec<(CatalogItem, usize)>,
    },
}

/// Background tasks that can be executed asynchronously
#[derive(Debug)]
pub enum BackgroundTask {
    FetchCatalog {
        url: String,
        placeholder_image: String,
    },
    /// Sleep out the artificial search delay, then rank the snapshot.
    /// Cancellation is by sequence number: the worker always reports,
    /// the reducer discards superseded results.
    DelayedSearch {
        query: String,
        seq: u64,
        items: Vec<CatalogItem>,
        delay_ms: u64,
    },
}

/// Background task worker that processes slow operations without blocking the UI
pub fn start_task_worker(
    mut task_rx: mpsc::UnboundedReceiver<BackgroundTask>,
    result_tx: mpsc::UnboundedSender<TaskResult>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        while let Some(task) = task_rx.recv().await {
            process_task(task, &client, &result_tx).await;
        }
    })
}

async fn process_task(
    task: BackgroundTask,
    client: &reqwest::Client,
    result_tx: &mpsc::UnboundedSender<TaskResult>,
) {
    match task {
        BackgroundTask::FetchCatalog {
            url,
            placeholder_image,
        } => {
            debug!("fetching catalog from {url}...");
            let result = fetch_catalog(client, &url, &placeholder_image)
                .await
                .map_err(|e| e.to_string());

            match &result {
                Ok(items) => {
                    debug!("catalog fetch succeeded: {} items", items.len());
                }
                Err(err) => {
                    error!("catalog fetch failed: {err}");
                }
            }

            let _ = result_tx.send(TaskResult::CatalogLoaded(result));
        }
        BackgroundTask::DelayedSearch {
            query,
            seq,
            items,
            delay_ms,
        } => {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;

            let results = rank_by_distance(&items, &query, DEFAULT_MAX_DISTANCE);
            debug!(
                "search #{seq} for {query:?}: {} of {} items matched",
                results.len(),
                items.len()
            );

            let _ = result_tx.send(TaskResult::SearchDone { seq, results });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CatalogItem {
        CatalogItem {
            id: "1".to_string(),
            name: Some(name.to_string()),
            price: "$10.00".to_string(),
            image: "x".to_string(),
            discount: None,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_search_reports_seq_and_ranked_results() {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();
        let _worker = start_task_worker(task_rx, result_tx);

        task_tx
            .send(BackgroundTask::DelayedSearch {
                query: "red shirt".to_string(),
                seq: 7,
                items: vec![item("Blue Pants"), item("Red Shirt")],
                delay_ms: 500,
            })
            .unwrap();

        // Paused time: the 500ms sleep elapses without wall-clock waiting
        let result = result_rx.recv().await.expect("worker should report");
        match result {
            TaskResult::SearchDone { seq, results } => {
                assert_eq!(seq, 7);
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].0.name.as_deref(), Some("Red Shirt"));
                assert_eq!(results[0].1, 0);
            }
            other => panic!("unexpected task result: {other:?}"),
        }
    }
}
