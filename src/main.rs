use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use log::LevelFilter;

use socially::{cli, config, error, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Print request diagnostics
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the playlists in your library
    Playlists,

    /// List the tracks of a library playlist
    Tracks(TracksOptions),

    /// Look up a catalog song by ISRC
    Isrc(IsrcOptions),

    /// Look up a catalog song by id
    Track(IdOptions),

    /// Look up a catalog artist by id
    Artist(IdOptions),

    #[clap(about = "Add a catalog song to a library playlist")]
    Add(AddOptions),

    /// Play a catalog song
    Play(IdOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Library playlist id (e.g. p.AbCdEf)
    playlist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct IsrcOptions {
    isrc: String,

    /// Storefront to search in, defaults to APPLE_MUSIC_STOREFRONT
    #[clap(long)]
    country: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOptions {
    /// Catalog id
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    playlist_id: String,
    track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_logging(verbose: bool) {
    let mut builder = colog::default_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    builder.init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    if config::developer_token().is_none() && !matches!(cli.command, Command::Completions(_)) {
        warning!(
            "{} is not set, requests will be rejected",
            config::DEVELOPER_TOKEN_VAR
        );
    }

    let service = cli::service();

    match cli.command {
        Command::Playlists => cli::playlists(&service).await,
        Command::Tracks(opt) => cli::tracks(&service, &opt.playlist_id).await,
        Command::Isrc(opt) => cli::isrc(&service, &opt.isrc, opt.country.as_deref()).await,
        Command::Track(opt) => cli::track(&service, &opt.id).await,
        Command::Artist(opt) => cli::artist(&service, &opt.id).await,
        Command::Add(opt) => cli::add(&service, &opt.playlist_id, &opt.track_id).await,
        Command::Play(opt) => cli::play(&service, &opt.id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
