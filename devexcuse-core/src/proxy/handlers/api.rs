use crate::conf::DevExcuseConfig;
use crate::corpus::ExcuseRecord;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::proxy::handlers::endpoint::ApiEndpoint;
use crate::proxy::handlers::error::ApiError;
use crate::proxy::handlers::landing::landing_page;
use crate::selection::{SearchOutcome, SelectionEngine};
use crate::visitors::VisitorStore;
use chrono::{SecondsFormat, Utc};
use http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// Everything a request handler may read. Built once at startup.
pub struct AppState {
    pub engine: SelectionEngine,
    pub visitors: Arc<dyn VisitorStore>,
    pub config: Arc<DevExcuseConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        engine: SelectionEngine,
        visitors: Arc<dyn VisitorStore>,
        config: Arc<DevExcuseConfig>,
    ) -> Self {
        Self {
            engine,
            visitors,
            config,
            started_at: Instant::now(),
        }
    }
}

/// Maps a request to a response. Knows nothing about Pingora, so it can be
/// driven directly in tests.
pub struct ApiHandler {
    state: Arc<AppState>,
}

impl ApiHandler {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn handle(&self, ctx: &RequestCtx) -> ResponseCtx {
        match self.dispatch(ctx).await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!(request_id = %ctx.request_id, error = %err, "request failed");
                err.into_response(self.state.config.server.environment)
            }
        }
    }

    async fn dispatch(&self, ctx: &RequestCtx) -> Result<ResponseCtx, ApiError> {
        let endpoint = ctx
            .path
            .parse::<ApiEndpoint>()
            .map_err(|_| ApiError::NotFound)?;

        if !endpoint.accepts(&ctx.method) {
            return Err(ApiError::MethodNotAllowed {
                method: ctx.method.clone(),
                allow: endpoint.allow(),
            });
        }

        match endpoint {
            ApiEndpoint::Landing => Ok(ResponseCtx::html(
                StatusCode::OK,
                landing_page(&self.state.config.rate_limit),
            )),
            ApiEndpoint::Health => Ok(self.health()),
            ApiEndpoint::Excuse => self.excuse(ctx),
            ApiEndpoint::Devil => Ok(ResponseCtx::json(StatusCode::OK, &ExcuseRecord::devil())),
            ApiEndpoint::Categories => Ok(ResponseCtx::json(
                StatusCode::OK,
                &self.state.engine.list_categories(),
            )),
            ApiEndpoint::Search => self.search(ctx),
            ApiEndpoint::Stats => Ok(self.stats()),
            ApiEndpoint::Visitors => self.visitors(&ctx.method).await,
        }
    }

    fn health(&self) -> ResponseCtx {
        let rl = &self.state.config.rate_limit;
        let window = rl.window_label();

        ResponseCtx::json(
            StatusCode::OK,
            &json!({
                "status": "healthy",
                "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                "uptime": self.state.started_at.elapsed().as_secs_f64(),
                "rateLimit": {
                    "general": format!("{} requests per {window}", rl.general_max),
                    "search": format!("{} requests per {window}", rl.search_max),
                },
            }),
        )
    }

    fn excuse(&self, ctx: &RequestCtx) -> Result<ResponseCtx, ApiError> {
        let category = ctx.query.non_empty("category");
        let count = parse_count(
            ctx.query.get("count"),
            self.state.config.selection.max_count,
        );

        if count == 1 {
            let excuse = self
                .state
                .engine
                .pick_one(category)
                .ok_or(ApiError::CategoryEmpty)?;
            return Ok(ResponseCtx::json(StatusCode::OK, &excuse));
        }

        let excuses = self.state.engine.pick_many(count, category);
        Ok(ResponseCtx::json(StatusCode::OK, &excuses))
    }

    fn search(&self, ctx: &RequestCtx) -> Result<ResponseCtx, ApiError> {
        let query = ctx.query.non_empty("q").ok_or(ApiError::MissingQuery)?;

        let outcome = self.state.engine.search(query);
        Ok(ResponseCtx::json(search_status(&outcome), &outcome))
    }

    fn stats(&self) -> ResponseCtx {
        ResponseCtx::json(
            StatusCode::OK,
            &json!({
                "totalExcuses": self.state.engine.corpus().len(),
                "totalServed": self.state.engine.served(),
            }),
        )
    }

    async fn visitors(&self, method: &Method) -> Result<ResponseCtx, ApiError> {
        let doc = if method == Method::POST {
            self.state.visitors.increment().await?
        } else {
            self.state.visitors.count().await?
        };

        Ok(ResponseCtx::json(StatusCode::OK, &doc))
    }
}

/// Status code for a search result.
pub fn search_status(outcome: &SearchOutcome) -> StatusCode {
    match outcome {
        SearchOutcome::Found { .. } => StatusCode::OK,
        // An empty result keeps its 404 for existing clients.
        SearchOutcome::NoMatches { .. } => StatusCode::NOT_FOUND,
        SearchOutcome::NoQuery { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Number of excuses requested by `?count=`.
///
/// Follows integer-prefix parsing ("3abc" is 3). Missing, unparsable and zero
/// values mean 1; the result is clamped to `1..=max`.
pub fn parse_count(raw: Option<&str>, max: usize) -> usize {
    let Some(raw) = raw else {
        return 1;
    };

    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if digits.is_empty() || negative {
        return 1;
    }

    // Overflowing values saturate to the cap.
    let n = digits.parse::<usize>().unwrap_or(usize::MAX);
    n.clamp(1, max.max(1))
}
