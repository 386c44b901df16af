use crate::catalog::CatalogClient;
use crate::prelude::{println, *};
use colored::Colorize;
use pokedex_core::detail::{build_detail, DetailPage};

const BAR_WIDTH: usize = 30;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Record name, e.g. "pikachu"
    #[clap(env = "POKEDEX_NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let catalog = CatalogClient::from_global(&global);

    if global.verbose {
        println!("Fetching {} from {}...", options.name, catalog.base_url());
    }

    let (pokemon, color) = match catalog.fetch_detail(&options.name).await {
        Ok(found) => found,
        Err(err) if err.is_not_found() => {
            return Err(eyre!("There is no Pokémon named {:?}", options.name))
        }
        Err(err) => return Err(err.into()),
    };

    let page = build_detail(&pokemon, &color);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", format_detail_text(&page));
    }

    Ok(())
}

/// Text bar of `width` percent, `BAR_WIDTH` characters wide
fn text_bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_detail_text(page: &DetailPage) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(60).bright_cyan()));
    result.push_str(&format!(
        "{} {}\n",
        page.label.bright_white().bold(),
        format!("#{}", page.number).bright_black()
    ));
    result.push_str(&format!("{}\n", "=".repeat(60).bright_cyan()));

    let types: Vec<&str> = page.types.iter().map(|t| t.name.as_str()).collect();
    result.push_str(&format!("{}: {}\n", "Types".green(), types.join(", ")));
    result.push_str(&format!("{}: {}\n", "Color".green(), page.color));
    result.push_str(&format!(
        "{}: {} | {}: {}\n",
        "Height".green(),
        page.height,
        "Weight".green(),
        page.weight
    ));

    result.push_str(&format!("\n{}\n", "BASE STATS".bright_yellow().bold()));
    for stat in &page.stats {
        result.push_str(&format!(
            "  {:>8} {:>4} {} {:>6.2}%\n",
            stat.label,
            stat.base,
            text_bar(stat.width),
            stat.width
        ));
    }

    result
}
