use super::*;

#[test]
fn every_category_round_trips_through_its_token() {
    for category in Category::ALL {
        assert_eq!(category.as_str().parse::<Category>(), Ok(category));
    }
}

#[test]
fn parse_is_case_insensitive_and_accepts_dashes() {
    assert_eq!("Hair-Care".parse::<Category>(), Ok(Category::HairCare));
    assert_eq!(" CAFE ".parse::<Category>(), Ok(Category::Cafe));
}

#[test]
fn unknown_token_is_rejected() {
    assert_eq!(
        "spaceport".parse::<Category>(),
        Err(CoreError::UnknownCategory("spaceport".to_string()))
    );
}

#[test]
fn parse_list_skips_blank_entries() {
    let parsed = Category::parse_list("cafe, ,bakery,").expect("valid list");
    assert_eq!(parsed, vec![Category::Cafe, Category::Bakery]);
}

#[test]
fn parse_list_fails_on_first_unknown_token() {
    let err = Category::parse_list("cafe,unicorns,bar").unwrap_err();
    assert_eq!(err, CoreError::UnknownCategory("unicorns".to_string()));
}

#[test]
fn serializes_as_upstream_token() {
    let json = serde_json::to_string(&Category::BeautySalon).expect("serialize");
    assert_eq!(json, "\"beauty_salon\"");
}
