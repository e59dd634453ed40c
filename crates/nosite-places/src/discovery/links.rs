//! Map links carried on every [`Business`](nosite_core::Business).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters JavaScript's `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Label used in the app link when a place has no name.
const UNNAMED_PLACE: &str = "Business";

/// Web profile link that opens the place in a browser.
#[must_use]
pub fn profile_url(place_id: &str) -> String {
    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
}

/// Search deep link that the maps app intercepts on phones.
#[must_use]
pub fn maps_app_url(name: Option<&str>, place_id: &str) -> String {
    let label = name.filter(|n| !n.is_empty()).unwrap_or(UNNAMED_PLACE);
    format!(
        "https://www.google.com/maps/search/?api=1&query={}&query_place_id={place_id}",
        utf8_percent_encode(label, URI_COMPONENT)
    )
}
