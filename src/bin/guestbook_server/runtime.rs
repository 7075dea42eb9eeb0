use std::net::SocketAddr;

use clap::Parser;

use super::*;

#[derive(Parser)]
#[command(name = "guestbook-server")]
#[command(about = "Audio guestbook recordings server (development)", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Directory holding the recordings
    #[arg(long, default_value = "./recordings")]
    recordings_dir: PathBuf,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    guestbook::logging::init_stderr("info").context("init logging")?;

    std::fs::create_dir_all(&args.recordings_dir).with_context(|| {
        format!("create recordings dir {}", args.recordings_dir.display())
    })?;

    let state = Arc::new(AppState {
        recordings_dir: args.recordings_dir.clone(),
    });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(
        addr = %local_addr,
        recordings = %args.recordings_dir.display(),
        "guestbook-server listening"
    );

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
