//! Web form: one page, one text field, one prediction.
//!
//! The classifier is loaded once before the server starts and shared
//! read-only between requests.

mod page;

use anyhow::{Context, Result};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use urlclass_core::classify::UrlClassifier;

use page::{render, Outcome};

/// Form body posted by the page.
#[derive(Debug, Deserialize)]
pub struct ClassifyForm {
    #[serde(default)]
    pub url: String,
}

/// Build the router serving the form.
pub fn router(classifier: Arc<UrlClassifier>) -> Router {
    Router::new()
        .route("/", get(show_form).post(submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(classifier)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, classifier: Arc<UrlClassifier>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local = listener.local_addr()?;
    tracing::info!(
        max_url_length = classifier.max_url_length(),
        "web form listening on http://{local}"
    );
    println!("Serving URL classifier on http://{local}");

    axum::serve(listener, router(classifier))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("web server")?;
    tracing::info!("web form stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

async fn show_form() -> Html<String> {
    Html(render("", None))
}

async fn submit(
    State(classifier): State<Arc<UrlClassifier>>,
    form: Result<Form<ClassifyForm>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::warn!("rejected form body: {rejection}");
            let outcome = Outcome::Failed(rejection.body_text());
            return (rejection.status(), Html(render("", Some(&outcome))));
        }
    };
    let url = input.url.trim();
    if url.is_empty() {
        return (StatusCode::OK, Html(render("", None)));
    }

    let outcome = match classifier.classify(url) {
        Ok(c) => {
            tracing::info!(url, class = %c.prediction.class, "form classification");
            Outcome::Predicted(c.prediction)
        }
        Err(e) => {
            tracing::warn!(url, "classification failed: {e}");
            Outcome::Failed(e.to_string())
        }
    };
    (StatusCode::OK, Html(render(url, Some(&outcome))))
}

async fn health() -> &'static str {
    "ok"
}
