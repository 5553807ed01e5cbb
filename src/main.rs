use clap::Parser;
use quizbank::{db::Db, import::AnswerPolicy, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path of the SQLite file holding the questions.
    #[arg(long, env = "DATABASE_PATH", default_value = names::DEFAULT_DATABASE_PATH)]
    database: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Largest accepted upload, in bytes.
    #[arg(long, env, default_value_t = names::DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Store the first option as correct when a row's answer letter isn't A-D,
    /// instead of rejecting the upload.
    #[arg(long, env = "QUIZBANK_LENIENT_ANSWERS")]
    lenient_answers: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quizbank=debug,axum=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database).await?;
    let state = AppState {
        answer_policy: if args.lenient_answers {
            AnswerPolicy::FirstOption
        } else {
            AnswerPolicy::Strict
        },
        max_upload_bytes: args.max_upload_bytes,
        ..AppState::new(db)
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, quizbank::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
