//! CSV export of search results.

use nosite_core::Business;

const HEADER: &str = "Name,Category,Distance (km),Phone,Address,Google Profile URL";

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_row(business: &Business) -> String {
    [
        quoted(&business.name),
        business.category.to_string(),
        format!("{:.2}", business.distance_km),
        quoted(&business.phone),
        quoted(&business.address),
        quoted(&business.profile_url),
    ]
    .join(",")
}

/// Header plus one line per business, newline-terminated.
pub(crate) fn to_csv(businesses: &[Business]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for business in businesses {
        out.push_str(&csv_row(business));
        out.push('\n');
    }
    out
}
