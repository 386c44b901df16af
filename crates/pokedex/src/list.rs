use crate::catalog::CatalogClient;
use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::listing::{build_listing, ListingPage, SortOrder};

#[derive(Debug, Clone, Copy, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortArg {
    /// A to Z
    Asc,
    /// Z to A
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Case-insensitive substring to match against names
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Sort by name; upstream order when omitted
    #[arg(short, long)]
    pub sort: Option<SortArg>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let catalog = CatalogClient::from_global(&global);

    if global.verbose {
        println!("Fetching {} records from {}...", global.limit, catalog.base_url());
    }

    let records = catalog.fetch_listing(global.limit).await?;
    let order = options.sort.map(SortOrder::from).unwrap_or_default();
    let page = build_listing(&records, &options.query, order);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", format_summary(&page));
        if !page.cards.is_empty() {
            build_table(&page).printstd();
        }
    }

    Ok(())
}

/// One-line header describing what the table shows
fn format_summary(page: &ListingPage) -> String {
    let order = match page.order {
        SortOrder::Unset => "catalog order",
        SortOrder::Ascending => "A to Z",
        SortOrder::Descending => "Z to A",
    };

    if page.query.is_empty() {
        format!(
            "{} of {} Pokémon ({})",
            page.cards.len().to_string().bright_cyan().bold(),
            page.total,
            order
        )
    } else {
        format!(
            "{} of {} Pokémon matching {} ({})",
            page.cards.len().to_string().bright_cyan().bold(),
            page.total,
            format!("\"{}\"", page.query).yellow(),
            order
        )
    }
}

fn build_table(page: &ListingPage) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["#", "Name", "Image"]);

    for card in &page.cards {
        table.add_row(prettytable::row![card.id, card.label, card.image_url]);
    }

    table
}
