use std::{
    future::IntoFuture as _,
    io,
    sync::{Arc, OnceLock},
    time,
};

use application::{api, config, graphql, Args, Config};
use axum::{
    extract::MatchedPath,
    routing::{on, MethodFilter},
    Extension, Router,
};
use axum_client_ip::InsecureClientIp;
use service::infra::{postgres, Postgres};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    fmt::writer::BoxMakeWriter,
    layer::{Layer, SubscriberExt as _},
    registry::LookupSpan,
    util::SubscriberInitExt as _,
};

/// [`log::Level`]s written to stderr instead of stdout.
const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

/// Maximum [`log::Level`] to emit, set once the [`Config`] is loaded.
static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

postgres::embed_migrations!("../migrations");

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(log_layer(Output::Stdout))
        .with(log_layer(Output::Stderr))
        .init();

    _ = start().await;
}

/// Stream a [`log_layer()`] writes to.
#[derive(Clone, Copy, Eq, PartialEq)]
enum Output {
    Stdout,
    Stderr,
}

/// Creates a compact [`Layer`] writing events of the configured
/// [`LOG_LEVEL`] to the provided [`Output`].
///
/// Spans go to both outputs.
fn log_layer<S>(output: Output) -> impl Layer<S>
where
    S: log::Subscriber + for<'a> LookupSpan<'a>,
{
    let writer = match output {
        Output::Stdout => BoxMakeWriter::new(io::stdout),
        Output::Stderr => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(true)
        .with_thread_names(true)
        .with_writer(writer)
        .with_filter(filter_fn(move |meta| {
            let is_stderr = STDERR_LEVELS.contains(meta.level());
            meta.is_span()
                || (is_stderr == (output == Output::Stderr))
                    && LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                        >= *meta.level()
        }))
}

async fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        postgres,
        service,
        server,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let mut postgres = Postgres::new(&postgres.into()).map_err(|e| {
        log::error!("failed to initialize `Postgres` client: {e}");
    })?;

    let report = migrations::runner()
        .run_async(&mut postgres)
        .await
        .map_err(|e| {
            log::error!("failed to run database migrations: {e}");
        })?;
    for m in report.applied_migrations() {
        log::info!("applied database migration `{m}`");
    }

    let service = application::Service::new(service.into(), postgres);
    let app = router(service, cors(&server.cors)?);

    let addr = (server.host.clone(), server.port);
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        log::error!(
            "failed to listen on `{}:{}`: {e}",
            server.host,
            server.port,
        );
    })?;
    log::info!("listening on `{}:{}`", server.host, server.port);

    axum::serve(listener, app)
        .into_future()
        .await
        .map_err(|e| log::error!("webserver failed: {e}"))
}

/// Builds the [`CorsLayer`] allowing GraphQL requests from the configured
/// origins.
fn cors(config: &config::Cors) -> Result<CorsLayer, ()> {
    config.origins.iter().try_fold(
        CorsLayer::new()
            .allow_methods([
                http::Method::GET,
                http::Method::OPTIONS,
                http::Method::POST,
            ])
            .allow_headers([
                http::header::AUTHORIZATION,
                http::header::CONTENT_TYPE,
            ]),
        |cors, origin| {
            let origin = origin
                .parse::<http::header::HeaderValue>()
                .map_err(|e| {
                    log::error!("`{origin}` is not a valid CORS origin: {e}");
                })?;
            Ok(cors.allow_origin(origin))
        },
    )
}

/// Builds the HTTP [`Router`] serving the GraphQL API.
fn router(service: application::Service, cors: CorsLayer) -> Router {
    let schema = api::Schema::new(
        api::Query,
        api::Mutation,
        juniper::EmptySubscription::new(),
    );

    Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .layer(Extension(Arc::new(schema)))
        .layer(Extension(service))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| {
                    log::info_span!(
                        "HTTP request",
                        http.client_ip = InsecureClientIp::from(
                            r.headers(),
                            r.extensions(),
                        )
                        .map(|ip| ip.0.to_string())
                        .ok(),
                        http.method = r.method().as_str(),
                        http.route = r
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str),
                        http.target = r
                            .uri()
                            .path_and_query()
                            .map(http::uri::PathAndQuery::as_str),
                        http.user_agent = r
                            .headers()
                            .get(http::header::USER_AGENT)
                            .and_then(|h| h.to_str().ok()),
                        http.status_code = log::field::Empty,
                    )
                })
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &log::Span| {
                        let status = r.status();
                        _ = span.record("http.status_code", status.as_u16());

                        let duration_ms =
                            u64::try_from(dur.as_millis()).unwrap_or(u64::MAX);
                        if status.is_server_error() {
                            log::error!(duration_ms, "request failed");
                        } else if status.is_client_error() {
                            log::warn!(duration_ms, "request rejected");
                        } else {
                            log::info!(duration_ms, "request served");
                        }
                    },
                ),
        )
}
