//! Terminal renderings of a finished search.

use nosite_core::{Business, SearchResults};

/// Printed in place of an empty table or card list.
pub(crate) const EMPTY_MESSAGE: &str = "No businesses found without websites";

/// Truncate `text` to `max` characters, marking the cut with `...`.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max.saturating_sub(3)).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Fixed-width table: one business per row, profile link last.
pub(crate) fn render_table(results: &SearchResults) -> String {
    if results.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = format!(
        "{:<32}{:<20}{:>9}  {:<18}{:<42}PROFILE\n",
        "NAME", "CATEGORY", "KM", "PHONE", "ADDRESS"
    );
    for business in &results.businesses {
        out.push_str(&format!(
            "{:<32}{:<20}{:>9.2}  {:<18}{:<42}{}\n",
            clip(&business.name, 30),
            business.category,
            business.distance_km,
            clip(&business.phone, 16),
            clip(&business.address, 40),
            business.profile_url
        ));
    }
    out
}

fn render_card(business: &Business) -> String {
    format!(
        "{} ({})\n  {:.2} km away\n  Phone: {}\n  Address: {}\n  Maps: {}\n",
        business.name,
        business.category,
        business.distance_km,
        business.phone,
        business.address,
        business.maps_app_url
    )
}

/// Stacked cards for narrow terminals; links open the maps app.
pub(crate) fn render_cards(results: &SearchResults) -> String {
    if results.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    results
        .businesses
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
