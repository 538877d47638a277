//! One-shot search CLI: query YouTube and print the rendered cards.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tubegrid_common::{
    render_results, Config, ResultKind, ResultsView, SearchCriteria, VideoSearcher,
    ALLOWED_LIMITS,
};
use youtube_client::YouTubeClient;

#[derive(Parser)]
#[command(name = "tubegrid")]
#[command(about = "Search YouTube and print thumbnail/title result cards")]
#[command(version)]
struct Cli {
    /// Search keyword
    #[arg(short, long)]
    query: String,

    /// Result kind to search for
    #[arg(short, long, value_enum, default_value_t = KindArg::Video)]
    kind: KindArg,

    /// Number of results to request
    #[arg(short, long, default_value_t = 5, value_parser = parse_limit)]
    limit: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Video,
    Playlist,
    Channel,
    Shorts,
}

impl From<KindArg> for ResultKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Video => ResultKind::Video,
            KindArg::Playlist => ResultKind::Playlist,
            KindArg::Channel => ResultKind::Channel,
            KindArg::Shorts => ResultKind::Shorts,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

/// Restrict --limit to the choices the search page exposes.
fn parse_limit(s: &str) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if ALLOWED_LIMITS.contains(&value) {
        Ok(value)
    } else {
        Err(format!("limit must be one of {ALLOWED_LIMITS:?}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let criteria = SearchCriteria::new(cli.query, cli.kind.into(), cli.limit);
    let request = criteria.to_request()?;

    let config = Config::from_env();
    let client = YouTubeClient::new(config.youtube_api_key);

    let items = client.search(&request).await?;
    let view = render_results(request.requested_kind, &items);

    match cli.output {
        OutputFormat::Plain => print_plain(&view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }

    Ok(())
}

fn print_plain(view: &ResultsView) {
    match view {
        ResultsView::Empty => println!("No results found."),
        ResultsView::Cards { cards } => {
            for card in cards {
                println!("{}", card.title);
                println!("  {}", card.link);
                if let Some(url) = &card.thumbnail_url {
                    println!("  {url}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_parser_accepts_only_ui_choices() {
        assert_eq!(parse_limit("5"), Ok(5));
        assert_eq!(parse_limit("200"), Ok(200));
        assert!(parse_limit("7").is_err());
        assert!(parse_limit("0").is_err());
        assert!(parse_limit("many").is_err());
    }
}
