//! HTML rendering for the listing and detail pages
//!
//! Pages are built as plain strings. Every value that came from the catalog
//! goes through `html_escape` before it lands in the markup.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use pokedex_core::card::CardView;
use pokedex_core::detail::DetailPage;
use pokedex_core::listing::{ListingPage, SortOrder};

const STYLES: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: Roboto, system-ui, sans-serif; }
a { color: inherit; text-decoration: none; }
.container { max-width: 56rem; margin: 0 auto; }
.listing { min-height: 100vh; background: #ef4444; }
.listing header { padding: 1rem; }
.listing h1 { color: #f8fafc; font-size: 1.5rem; margin: 0 0 1rem; }
.controls { display: flex; gap: 1rem; }
.controls form { flex: 1; }
.controls input { width: 100%; padding: .5rem 1rem; border: 1px solid #e5e7eb; border-radius: .75rem; }
.sort { padding: .5rem 1rem; border-radius: .75rem; background: #e5e7eb; white-space: nowrap; }
.grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; list-style: none; margin: 0;
        padding: 2rem 1rem; background: #fff; border-radius: .75rem .75rem 0 0; min-height: calc(100vh - 9rem); }
.card a { display: flex; flex-direction: column; align-items: center; border: 1px solid #e5e7eb;
          border-radius: .75rem; box-shadow: 0 4px 6px rgba(0,0,0,.1); overflow: hidden; }
.card .number { align-self: flex-end; font-size: .75rem; color: #9ca3af; margin: .5rem .5rem 0; }
.card .label { width: 100%; text-align: center; padding: .5rem; background: #f3f4f6; font-weight: 600; color: #374151; }
.empty { grid-column: 1 / -1; text-align: center; color: #6b7280; }
.detail header { display: flex; justify-content: space-between; align-items: center; padding: 1rem; }
.detail h1 { font-size: 1.5rem; margin: 0; letter-spacing: .05em; }
.detail .number { font-size: 1.25rem; color: #94a3b8; }
.artwork { display: block; margin: 0 auto; width: 240px; height: 240px; }
.sheet { background: #fff; border-radius: .5rem .5rem 0 0; padding: 2rem 1rem; display: flex; flex-direction: column; gap: 1rem; }
.types { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
.badge { display: inline-flex; flex-direction: column; align-items: center; gap: .25rem; }
.badge span { padding: .125rem .75rem; border-radius: 9999px; color: #fff; font-size: .875rem; text-transform: uppercase; }
.sheet h2 { text-align: center; font-size: 1.25rem; margin: 0 0 1rem; }
.about { display: flex; justify-content: space-around; }
.about .value { font-size: 1.25rem; font-weight: 700; margin: 0; }
.about .caption { font-size: .875rem; color: #6b7280; margin: 0; }
.stat { display: flex; align-items: center; gap: 1rem; padding: 0 1rem; margin-bottom: .75rem; }
.stat .stat-label { width: 16%; text-align: right; font-size: .875rem; margin: 0; }
.stat .stat-value { width: 8%; font-weight: 600; margin: 0; }
.stat .track { flex: 1; height: .625rem; background: #e5e7eb; border-radius: 9999px; }
.stat .fill { height: .625rem; border-radius: 9999px; }
.error { text-align: center; padding: 4rem 1rem; }
"#;

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLES}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        text(title)
    )
}

/// Link to the listing with the given search text and sort order
pub fn listing_href(query: &str, order: SortOrder) -> String {
    let mut params = Vec::new();
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(sort) = order.as_param() {
        params.push(format!("sort={sort}"));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

pub fn render_card(card: &CardView) -> String {
    format!(
        "<li class=\"card\"><a href=\"{href}\">\
         <p class=\"number\">#{id}</p>\
         <img src=\"{src}\" alt=\"{alt}\" width=\"96\" height=\"96\">\
         <span class=\"label\">{label}</span>\
         </a></li>",
        href = attr(&card.href),
        id = text(&card.id),
        src = attr(&card.image_url),
        alt = attr(&card.name),
        label = text(&card.label),
    )
}

pub fn render_listing(page: &ListingPage) -> String {
    let arrow = match page.order {
        SortOrder::Descending => "&uarr;",
        SortOrder::Ascending | SortOrder::Unset => "&darr;",
    };

    let sort_input = page
        .order
        .as_param()
        .map(|sort| format!("<input type=\"hidden\" name=\"sort\" value=\"{sort}\">"))
        .unwrap_or_default();

    let cards = if page.cards.is_empty() {
        "<li class=\"empty\">No Pok&eacute;mon match your search.</li>".to_string()
    } else {
        page.cards.iter().map(render_card).collect::<Vec<_>>().join("\n")
    };

    let body = format!(
        "<main class=\"listing\"><div class=\"container\">\
         <header><h1>Pok&eacute;dex</h1>\
         <div class=\"controls\">\
         <form method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"q\" placeholder=\"Search by name\" value=\"{query}\">{sort_input}\
         </form>\
         <a class=\"sort\" href=\"{toggle}\">A-Z {arrow}</a>\
         </div></header>\
         <ul class=\"grid\">\n{cards}\n</ul>\
         </div></main>",
        query = attr(&page.query),
        toggle = attr(&listing_href(&page.query, page.next_order)),
    );

    layout("Pokédex", &body)
}

pub fn render_detail(page: &DetailPage) -> String {
    let types = page
        .types
        .iter()
        .map(|badge| {
            format!(
                "<div class=\"badge\"><img src=\"{src}\" alt=\"{alt}\" width=\"96\" height=\"21\">\
                 <span style=\"background-color: {color}\">{name}</span></div>",
                src = attr(&badge.icon_url),
                alt = attr(&badge.name),
                color = badge.color,
                name = text(&badge.name),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let stats = page
        .stats
        .iter()
        .map(|stat| {
            format!(
                "<div class=\"stat\"><p class=\"stat-label\">{label}</p>\
                 <p class=\"stat-value\">{base}</p>\
                 <div class=\"track\"><div class=\"fill\" style=\"width: {width:.2}%; background-color: {color}\"></div></div>\
                 </div>",
                label = text(&stat.label),
                base = stat.base,
                width = stat.width,
                color = attr(&page.color),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "<main class=\"detail\" style=\"background-color: {color}\"><div class=\"container\">\
         <header style=\"color: {text_color}\">\
         <h1><a href=\"/\" aria-label=\"Back\">&larr;</a> {label}</h1>\
         <p class=\"number\">#{number}</p>\
         </header>\
         <img class=\"artwork\" src=\"{artwork}\" alt=\"{alt}\">\
         <section class=\"sheet\">\
         <div class=\"types\">\n{types}\n</div>\
         <div><h2 style=\"color: {heading}\">About</h2>\
         <div class=\"about\">\
         <div><p class=\"value\">{height}</p><p class=\"caption\">Height</p></div>\
         <div><p class=\"value\">{weight}</p><p class=\"caption\">Weight</p></div>\
         </div></div>\
         <div><h2 style=\"color: {heading}\">Base Stats</h2>\n{stats}\n</div>\
         </section></div></main>",
        color = attr(&page.color),
        text_color = page.text_color,
        label = text(&page.label),
        number = text(&page.number),
        artwork = attr(&page.artwork_url),
        alt = attr(&page.name),
        heading = attr(&page.heading_color),
        height = text(&page.height),
        weight = text(&page.weight),
    );

    layout(&page.label, &body)
}

/// Fallback page shown when the catalog cannot serve a request
pub fn render_error(title: &str, message: &str) -> String {
    let body = format!(
        "<main class=\"error\"><h1>{}</h1><p>{}</p><p><a href=\"/\">Back to the Pok&eacute;dex</a></p></main>",
        text(title),
        text(message)
    );

    layout(title, &body)
}
