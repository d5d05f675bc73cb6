use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use gofetch_ui::client::HttpSearchApi;
use gofetch_ui::config::UiConfig;
use gofetch_ui::controller::SearchController;
use gofetch_ui::dom::{Document, SearchView, SubmitEvent, RESULTS_ID};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .ok();

    let cfg = UiConfig::from_env().context("invalid configuration")?;
    info!(
        api_base = %cfg.api_base,
        mode = ?cfg.mode,
        timeout_secs = cfg.request_timeout.as_secs(),
        "configuration loaded"
    );

    let doc = Arc::new(Document::search_page());
    let view = SearchView::bind(&doc).context("search page is missing required elements")?;
    let api = HttpSearchApi::new(cfg.api_base.clone(), cfg.request_timeout)
        .context("failed to build http client")?;
    let controller = SearchController::new(Arc::new(api), view.clone(), cfg.pagination());

    info!("reading queries from stdin, one per line");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut inflight = JoinSet::new();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        view.input.set_value(line);
        let mut event = SubmitEvent::new(view.form.id());
        let pending = controller.on_submit(&mut event);
        let doc = doc.clone();
        let print_page = cfg.print_page;
        inflight.spawn(async move {
            // print what this submission wrote, not what the container holds by now
            let Some(markup) = pending.await.markup else {
                return;
            };
            if print_page {
                println!("{}", doc.to_html_with(RESULTS_ID, &markup));
            } else {
                println!("{markup}");
            }
        });
        // reap finished submissions so the set does not grow unbounded
        while inflight.try_join_next().is_some() {}
    }

    while let Some(res) = inflight.join_next().await {
        if let Err(e) = res {
            warn!(error = %e, "submission task failed");
        }
    }
    Ok(())
}
