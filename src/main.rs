use std::{env, io};

use log::{error, info};
use tokio::{net::TcpListener, signal};

use eventboard::{page::render_document, server, theme::Theme, Loader, State};

mod cli;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", concat!(env!("CARGO_CRATE_NAME"), "=info"));
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = cli::parse(env::args().skip(1).collect());
    setup_logging();

    let loader = Loader::new(args.upstream);

    if args.print {
        let mut state = State::default();
        if let Err(err) = loader.load(&mut state).await {
            error!("Failed to load events from {}: {err}", loader.url());
        }

        print!("{}", render_document(&state, &Theme::default(), &args.offset));
        return Ok(());
    }

    let board = server::Board::new(loader, args.offset);
    let router = server::router(board);

    let listener = TcpListener::bind(args.address).await?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(err) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {err}");
            }
        })
        .await
}
