use super::*;
use crate::facility::FacilityType;

fn record(id: &str, name: &str, address: &str, status: Option<FacilityStatus>) -> FacilityRecord {
    FacilityRecord {
        location_id: id.to_owned(),
        applicant_name: name.to_owned(),
        facility_type: Some(FacilityType::Truck),
        address: address.to_owned(),
        status,
        food_items: String::new(),
        latitude: 0.0,
        longitude: 0.0,
    }
}

fn fixture() -> Vec<FacilityRecord> {
    vec![
        record("1", "Krusty Krab", "123 Main St", Some(FacilityStatus::Approved)),
        record("2", "Pizza Planet", "456 Story Ave", Some(FacilityStatus::Requested)),
    ]
}

fn ids(results: &[&FacilityRecord]) -> Vec<String> {
    results.iter().map(|r| r.location_id.clone()).collect()
}

// -----------------------------------------------------------------------
// search
// -----------------------------------------------------------------------

#[test]
fn empty_term_and_no_status_returns_everything_in_order() {
    let records = fixture();
    let results = search(&records, "", SearchField::All, None);
    assert_eq!(ids(&results), ["1", "2"]);
}

#[test]
fn empty_input_returns_empty_result() {
    let results = search(&[], "krab", SearchField::All, Some(FacilityStatus::Approved));
    assert!(results.is_empty());
}

#[test]
fn name_search_matches_applicant_only() {
    let records = fixture();
    let results = search(&records, "Krab", SearchField::Name, None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].applicant_name, "Krusty Krab");
}

#[test]
fn name_search_ignores_address() {
    let records = fixture();
    assert!(search(&records, "Main", SearchField::Name, None).is_empty());
}

#[test]
fn address_search_is_case_insensitive() {
    let records = fixture();
    let results = search(&records, "STO", SearchField::Address, None);
    assert_eq!(ids(&results), ["2"]);
    assert_eq!(results[0].applicant_name, "Pizza Planet");
}

#[test]
fn all_fields_search_checks_name_and_address() {
    let records = fixture();
    assert_eq!(ids(&search(&records, "STO", SearchField::All, None)), ["2"]);
    assert_eq!(ids(&search(&records, "krusty", SearchField::All, None)), ["1"]);
    assert_eq!(ids(&search(&records, "main st", SearchField::All, None)), ["1"]);
}

#[test]
fn status_filter_requires_exact_status() {
    let records = fixture();
    let results = search(&records, "", SearchField::All, Some(FacilityStatus::Requested));
    assert_eq!(ids(&results), ["2"]);
    assert!(search(&records, "", SearchField::All, Some(FacilityStatus::Expired)).is_empty());
}

#[test]
fn record_without_status_never_matches_status_filter() {
    let records = vec![record("9", "No Status", "1 Nowhere", None)];
    assert!(search(&records, "", SearchField::All, Some(FacilityStatus::Approved)).is_empty());
    assert_eq!(search(&records, "", SearchField::All, None).len(), 1);
}

#[test]
fn term_and_status_must_both_match() {
    let records = fixture();
    assert!(search(&records, "Krab", SearchField::Name, Some(FacilityStatus::Requested)).is_empty());
    assert_eq!(
        ids(&search(&records, "Krab", SearchField::Name, Some(FacilityStatus::Approved))),
        ["1"]
    );
}

#[test]
fn whitespace_term_is_not_trimmed() {
    let records = fixture();
    // Both records contain a space somewhere.
    assert_eq!(search(&records, " ", SearchField::All, None).len(), 2);
    // Trailing space after "Krab" appears in neither field.
    assert!(search(&records, "Krab ", SearchField::Name, None).is_empty());
    assert_eq!(ids(&search(&records, " Krab", SearchField::Name, None)), ["1"]);
}

#[test]
fn empty_fields_do_not_match_a_non_empty_term() {
    let records = vec![record("3", "", "", None)];
    assert!(search(&records, "a", SearchField::All, None).is_empty());
}

#[test]
fn search_is_idempotent_and_leaves_input_untouched() {
    let records = fixture();
    let before = records.clone();
    let first = ids(&search(&records, "a", SearchField::All, None));
    let second = ids(&search(&records, "a", SearchField::All, None));
    assert_eq!(first, second);
    assert_eq!(records, before);
}

// -----------------------------------------------------------------------
// SearchField / Query
// -----------------------------------------------------------------------

#[test]
fn unknown_field_selector_falls_back_to_all() {
    assert_eq!(SearchField::from_param("name"), SearchField::Name);
    assert_eq!(SearchField::from_param("address"), SearchField::Address);
    assert_eq!(SearchField::from_param("all"), SearchField::All);
    assert_eq!(SearchField::from_param("Name"), SearchField::All);
    assert_eq!(SearchField::from("food"), SearchField::All);
}

#[test]
fn default_query_matches_everything() {
    let records = fixture();
    let query = Query::default();
    assert_eq!(query.search_field, SearchField::All);
    assert_eq!(ids(&query.apply(&records)), ["1", "2"]);
}

#[test]
fn query_apply_uses_all_three_inputs() {
    let records = fixture();
    let query = Query {
        search_term: "planet".to_owned(),
        search_field: SearchField::Name,
        status_filter: Some(FacilityStatus::Requested),
    };
    assert_eq!(ids(&query.apply(&records)), ["2"]);
}
