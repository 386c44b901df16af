use crate::prelude::*;
use clap::Parser;

mod catalog;
mod error;
mod list;
mod prelude;
mod show;
mod web;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse the PokeAPI catalog from a server-rendered site or the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base URL of the catalog API
    #[clap(
        long,
        env = "POKEDEX_CATALOG_BASE",
        global = true,
        default_value = catalog::DEFAULT_CATALOG_BASE
    )]
    catalog_base: String,

    /// Number of records fetched for the listing
    #[clap(long, env = "POKEDEX_LIMIT", global = true, default_value = "100")]
    limit: usize,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the listing and detail pages over HTTP
    Serve(crate::web::ServeOptions),

    /// Print the listing, optionally filtered and sorted
    List(crate::list::ListOptions),

    /// Print the detail view of one record
    Show(crate::show::ShowOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::web::run(options, app.global).await,
        SubCommands::List(options) => crate::list::run(options, app.global).await,
        SubCommands::Show(options) => crate::show::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
