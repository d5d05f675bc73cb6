use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use gofetch_api::{Pagination, SearchRequest};
use gofetch_query::Query;
use tracing::{debug, error, info};

use crate::client::SearchApi;
use crate::dom::{Container, SearchView, SubmitEvent};
use crate::render::{render_results, ERROR_HTML};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The event targeted a different form; nothing was done.
    Ignored,
    /// Blank query: container emptied, no request sent.
    Cleared,
    /// Response rendered; `items` is the number of result records.
    Rendered { items: usize },
    /// Transport, status or decode failure; the error item is shown.
    Failed,
    /// A newer submission was made before this one resolved; its response was dropped.
    Superseded,
}

/// Result of one submission. `markup` is exactly what this submission wrote
/// into the results container, captured under the container lock; `None` when
/// it wrote nothing (ignored or superseded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub outcome: SubmitOutcome,
    pub markup: Option<String>,
}

impl Submitted {
    fn untouched(outcome: SubmitOutcome) -> Self {
        Self { outcome, markup: None }
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Submitted> + Send + 'static>>;

/// Binds a [`SearchView`] to a [`SearchApi`].
///
/// Submissions may overlap. Each takes a sequence number when submitted and
/// writes the results container only while its number is still the latest,
/// so the last submitted query wins whatever order responses arrive in.
#[derive(Clone)]
pub struct SearchController {
    api: Arc<dyn SearchApi>,
    view: SearchView,
    pagination: Option<Pagination>,
    latest: Arc<AtomicU64>,
}

impl SearchController {
    pub fn new(api: Arc<dyn SearchApi>, view: SearchView, pagination: Option<Pagination>) -> Self {
        Self {
            api,
            view,
            pagination,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// Sequence number of the most recent submission (0 before the first).
    pub fn latest_seq(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    fn next_seq(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Handle a form submission.
    ///
    /// The event, the input value and the sequence number are consumed before
    /// this returns; the returned future performs the request and the update.
    pub fn on_submit(&self, event: &mut SubmitEvent) -> SubmitFuture {
        if event.form_id() != self.view.form.id() {
            return Box::pin(std::future::ready(Submitted::untouched(SubmitOutcome::Ignored)));
        }
        event.prevent_default();

        let raw = self.view.input.value();
        let Some(query) = Query::parse(&raw) else {
            let mut results = self.view.results.lock();
            let seq = self.next_seq();
            results.clear();
            debug!(seq, "blank query; results cleared");
            return Box::pin(std::future::ready(Submitted {
                outcome: SubmitOutcome::Cleared,
                markup: Some(String::new()),
            }));
        };

        let seq = self.next_seq();
        let req = SearchRequest::new(query, self.pagination);
        let api = self.api.clone();
        let results = self.view.results.clone();
        let latest = self.latest.clone();
        info!(seq, query = %req.query, "search submitted");

        Box::pin(async move {
            let started = Instant::now();
            let res = api.search(&req).await;
            let elapsed = started.elapsed();
            let (html, outcome) = match res {
                Ok(resp) => {
                    let items = resp.as_ref().map_or(0, |r| r.items().len());
                    debug!(seq, items, elapsed_ms = elapsed.as_millis() as u64, "search ok");
                    (
                        render_results(resp.as_ref(), elapsed.as_secs_f64()),
                        SubmitOutcome::Rendered { items },
                    )
                }
                Err(err) => {
                    error!(seq, query = %req.query, error = %err, "fetch error");
                    (ERROR_HTML.to_string(), SubmitOutcome::Failed)
                }
            };
            write_if_latest(&results, &latest, seq, html, outcome)
        })
    }
}

fn write_if_latest(
    results: &Container,
    latest: &AtomicU64,
    seq: u64,
    html: String,
    outcome: SubmitOutcome,
) -> Submitted {
    let mut markup = results.lock();
    let current = latest.load(Ordering::SeqCst);
    if current != seq {
        debug!(seq, current, "stale response discarded");
        return Submitted::untouched(SubmitOutcome::Superseded);
    }
    markup.clone_from(&html);
    Submitted {
        outcome,
        markup: Some(html),
    }
}
