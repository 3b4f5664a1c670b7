//! Search Service
//!
//! Background worker that executes directory searches off the UI loop.
//! Every request runs in its own task; nothing is cancelled, so a slow
//! response may arrive after a newer one. Receivers tell them apart by `seq`.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::{DirectoryEntry, DirectorySearch};
use crate::error::SearchError;

/// One query to issue, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub term: String,
}

/// Outcome of one query
#[derive(Debug)]
pub struct SearchResult {
    pub seq: u64,
    pub term: String,
    pub entries: Result<Vec<DirectoryEntry>, SearchError>,
}

async fn execute_request<S: DirectorySearch + ?Sized>(searcher: &S, request: SearchRequest) -> SearchResult {
    let entries = searcher.search(&request.term).await;

    match &entries {
        Ok(found) => tracing::debug!(
            seq = request.seq,
            term = %request.term,
            count = found.len(),
            "search completed"
        ),
        Err(e) => tracing::warn!(seq = request.seq, term = %request.term, error = %e, "search failed"),
    }

    SearchResult {
        seq: request.seq,
        term: request.term,
        entries,
    }
}

/// Spawn the search worker
pub fn spawn_search_service<S>(
    searcher: Arc<S>,
) -> (
    mpsc::UnboundedSender<SearchRequest>,
    mpsc::UnboundedReceiver<SearchResult>,
)
where
    S: DirectorySearch + ?Sized + 'static,
{
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (result_tx, result_rx) = mpsc::unbounded_channel::<SearchResult>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let searcher = Arc::clone(&searcher);
            let result_tx = result_tx.clone();

            tokio::spawn(async move {
                let result = execute_request(searcher.as_ref(), request).await;
                // Receiver gone means the page is closing
                let _ = result_tx.send(result);
            });
        }
    });

    (request_tx, result_rx)
}
