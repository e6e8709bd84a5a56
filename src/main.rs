use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use futures::StreamExt;
use log::{debug, info};

use movie_repository::{
    IMDB_API_ENDPOINT, MovieRepository, NetworkResult, RemoteMovieRepository, RestFetcher,
    StdResult,
};

/// Command line arguments for the popular movies fetcher
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Base URL of the movie API
    #[arg(short, long, default_value = IMDB_API_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting popular movies fetch");
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let repository = build_remote_repository(&args)?;
    let mut states = repository.fetch_popular_movies();
    while let Some(state) = states.next().await {
        match state {
            NetworkResult::Loading(_) => info!("Fetching most popular movies"),
            NetworkResult::Success(movies) => {
                for movie in &movies {
                    info!("Fetched {movie}");
                }
                info!("Fetch completed, {} movies retrieved", movies.len());
            }
            NetworkResult::Failure(message) => {
                return Err(anyhow!("Fetch failed: {message}"));
            }
        }
    }

    Ok(())
}

fn build_remote_repository(args: &Args) -> StdResult<Arc<dyn MovieRepository>> {
    let fetcher = Arc::new(RestFetcher::try_new(&args.endpoint)?);

    Ok(Arc::new(RemoteMovieRepository::new(fetcher)))
}
