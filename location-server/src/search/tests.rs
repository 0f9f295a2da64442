//! Engine tests against a scripted geocoder.

use super::*;
use crate::cache::{CacheConfig, CacheKey, ManualClock, SuggestionCache};
use crate::domain::Coordinates;
use crate::gazetteer::LocationKind;
use crate::geocoding::{MockGeocoder, RawFeature};
use std::sync::Arc;
use std::time::Duration;

fn poi(id: &str, text: &str, place_name: &str, lat: f64, lng: f64) -> RawFeature {
    RawFeature::new(id, text, place_name, "poi", Coordinates::new(lat, lng))
}

fn address(id: &str, text: &str, place_name: &str, lat: f64, lng: f64) -> RawFeature {
    RawFeature::new(id, text, place_name, "address", Coordinates::new(lat, lng))
}

fn heathrow_poi() -> RawFeature {
    poi(
        "poi.1168231",
        "London Heathrow Airport",
        "London Heathrow Airport, Hounslow, TW6 1QG, United Kingdom",
        51.4700,
        -0.4543,
    )
    .with_category("airport")
}

fn heathrow_road() -> RawFeature {
    address(
        "address.884",
        "Heathrow Road",
        "Heathrow Road, Guildford, GU4 7QD, United Kingdom",
        51.2310,
        -0.5478,
    )
}

fn search(mock: MockGeocoder) -> LocationSearch<MockGeocoder> {
    LocationSearch::with_defaults(mock)
}

fn ids(results: &[crate::domain::LocationSuggestion]) -> Vec<&str> {
    results.iter().map(|s| s.id.as_str()).collect()
}

// Category search

#[tokio::test]
async fn category_first_strategy_short_circuits() {
    let mock = MockGeocoder::new().with_typed_features("Heathrow Airport", "poi", vec![heathrow_poi()]);
    let search = search(mock);

    let results = search.search_by_category("airports").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.1168231"]);
    assert_eq!(search.geocoder().calls_for("Heathrow Airport"), 1);

    // Names with no results try every strategy, most specific first.
    let gatwick: Vec<_> = search
        .geocoder()
        .calls()
        .into_iter()
        .filter(|c| c.text == "Gatwick Airport")
        .map(|c| c.types)
        .collect();
    assert_eq!(gatwick, [Some("poi".to_string()), Some("place".to_string()), None]);
}

#[tokio::test]
async fn category_falls_back_to_place_strategy() {
    let gatwick = RawFeature::new(
        "place.77",
        "Gatwick",
        "Gatwick, Crawley, United Kingdom",
        "place",
        Coordinates::new(51.1537, -0.1821),
    );
    let mock = MockGeocoder::new().with_typed_features("Gatwick Airport", "place", vec![gatwick]);
    let search = search(mock);

    let results = search.search_by_category("airports").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:place.77"]);
    assert_eq!(results[0].metadata.category, "airports");
    assert_eq!(search.geocoder().calls_for("Gatwick Airport"), 2);
}

#[tokio::test]
async fn category_results_deduplicated_across_queries() {
    let mock = MockGeocoder::new()
        .with_features("Heathrow Airport", vec![heathrow_poi()])
        .with_features("Gatwick Airport", vec![heathrow_poi()]);
    let search = search(mock);

    let results = search.search_by_category("airports").await.unwrap();
    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn category_results_capped() {
    let mut mock = MockGeocoder::new();
    let category = crate::gazetteer::categories::find("landmarks").unwrap();
    for (i, name) in category.search_queries.iter().enumerate() {
        let features = (0..5)
            .map(|j| poi(&format!("poi.{i}.{j}"), name, name, 51.5, -0.1))
            .collect();
        mock = mock.with_features(name, features);
    }
    let search = search(mock);

    let results = search.search_by_category("landmarks").await.unwrap();
    assert_eq!(results.len(), SearchConfig::default().category_max_results);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let search = search(MockGeocoder::new());

    let err = search.search_by_category("volcanoes").await.unwrap_err();

    assert_eq!(err, LocationError::CategoryNotFound("volcanoes".to_string()));
    assert_eq!(search.geocoder().call_count(), 0);
}

#[tokio::test]
async fn missing_credentials_fail_before_any_query() {
    let search = search(MockGeocoder::unconfigured());

    let err = search.search_by_category("airports").await.unwrap_err();
    assert!(matches!(err, LocationError::Configuration(_)));

    let err = search.search("heathrow").await.unwrap_err();
    assert!(matches!(err, LocationError::Configuration(_)));

    assert_eq!(search.geocoder().call_count(), 0);
}

// Caching

#[tokio::test]
async fn repeated_search_served_from_cache() {
    let search = search(MockGeocoder::new().with_features("heathrow", vec![heathrow_poi()]));

    let first = search.search("heathrow").await.unwrap();
    let calls = search.geocoder().call_count();
    let second = search.search("  HEATHROW ").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(search.geocoder().call_count(), calls);
}

#[tokio::test]
async fn cache_expires_after_ttl() {
    let clock = ManualClock::new();
    let cache = SuggestionCache::with_clock(&CacheConfig::default(), clock.clone());
    let search = LocationSearch::new(
        MockGeocoder::new().with_features("heathrow", vec![heathrow_poi()]),
        cache,
        SearchConfig::default(),
    );

    search.search("heathrow").await.unwrap();
    let calls = search.geocoder().call_count();

    clock.advance(Duration::from_secs(599));
    search.search("heathrow").await.unwrap();
    assert_eq!(search.geocoder().call_count(), calls);

    clock.advance(Duration::from_secs(2));
    search.search("heathrow").await.unwrap();
    assert_eq!(search.geocoder().call_count(), calls * 2);
}

#[tokio::test]
async fn modes_do_not_share_cache_entries() {
    let tower = poi(
        "poi.9",
        "Tower Bridge",
        "Tower Bridge, London, SE1 2UP, United Kingdom",
        51.5055,
        -0.0754,
    );
    let search = search(MockGeocoder::new().with_features("tower bridge", vec![tower]));

    search.search("tower bridge").await.unwrap();
    let calls = search.geocoder().call_count();
    search.search_famous_places("tower bridge").await.unwrap();

    assert!(search.geocoder().call_count() > calls);
}

#[tokio::test]
async fn outage_is_not_cached() {
    let mock = MockGeocoder::new()
        .failing("heathrow")
        .failing("heathrow hotel");
    let search = search(mock);

    let results = search.search("heathrow").await.unwrap();

    assert!(results.is_empty());
    assert!(search.cache().get(&CacheKey::enhanced("heathrow")).await.is_none());
}

#[tokio::test]
async fn partial_failure_still_cached() {
    let mock = MockGeocoder::new()
        .with_features("heathrow", vec![heathrow_poi()])
        .failing("heathrow hotel");
    let search = search(mock);

    let results = search.search("heathrow").await.unwrap();

    assert_eq!(results.len(), 1);
    assert!(search.cache().get(&CacheKey::enhanced("heathrow")).await.is_some());
}

#[tokio::test]
async fn strict_outage_is_an_error() {
    let mock = MockGeocoder::new()
        .failing("heathrow")
        .failing("heathrow hotel");
    let search = search(mock);

    let response = search
        .handle(&LocationQuery::free_text("heathrow").strict())
        .await;

    assert!(!response.success);
    let error = response.error.unwrap();
    assert_eq!(error.kind, "UpstreamFailure");
    assert_eq!(error.message, "all 2 geocoding requests failed");
}

// Free text

#[tokio::test]
async fn free_text_orders_by_type() {
    let search = search(
        MockGeocoder::new().with_features("heathrow", vec![heathrow_road(), heathrow_poi()]),
    );

    let results = search.search("heathrow").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.1168231", "mapbox:address.884"]);
    assert_eq!(results[0].metadata.primary_type, "poi");
    assert_eq!(results[0].metadata.category, "airport");
    assert_eq!(results[1].metadata.primary_type, "address");
}

#[tokio::test]
async fn free_text_merges_hotel_results() {
    let hotel = poi(
        "poi.555",
        "Hilton London Heathrow Airport",
        "Hilton London Heathrow Airport, Hounslow, TW6 2GD, United Kingdom",
        51.4736,
        -0.4445,
    );
    let mock = MockGeocoder::new()
        .with_features("heathrow", vec![heathrow_poi()])
        .with_typed_features("heathrow hotel", "poi", vec![hotel, heathrow_poi()]);
    let search = search(mock);

    let results = search.search("heathrow").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.1168231", "mapbox:poi.555"]);
    assert_eq!(search.geocoder().calls_for("heathrow hotel"), 1);
}

#[tokio::test]
async fn dedup_keeps_first_seen() {
    let mut renamed = heathrow_poi();
    renamed.text = "Heathrow (hotel result)".to_string();
    let mock = MockGeocoder::new()
        .with_features("heathrow", vec![heathrow_poi()])
        .with_features("heathrow hotel", vec![renamed]);
    let search = search(mock);

    let results = search.search("heathrow").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].main_text, "London Heathrow Airport");
}

#[tokio::test]
async fn accommodation_query_skips_hotel_strategy() {
    let search = search(MockGeocoder::new());

    search.search("Premier Inn Kings Cross").await.unwrap();

    assert_eq!(search.geocoder().call_count(), 1);
}

#[tokio::test]
async fn empty_query_makes_no_calls() {
    let search = search(MockGeocoder::new());

    assert!(search.search("   ").await.unwrap().is_empty());
    assert!(search.search_famous_places("").await.unwrap().is_empty());
    assert_eq!(search.geocoder().call_count(), 0);
}

#[tokio::test]
async fn invalid_coordinates_dropped() {
    let mut no_center = poi("poi.2", "Nowhere", "Nowhere, United Kingdom", 51.0, -1.0);
    no_center.center = None;
    let search = search(MockGeocoder::new().with_features("nowhere", vec![no_center]));

    assert!(search.search("nowhere").await.unwrap().is_empty());
}

// Famous places

#[tokio::test]
async fn famous_places_keeps_landmarks_mentioning_query() {
    let castle = poi(
        "poi.10",
        "Windsor Castle",
        "Windsor Castle, Windsor, SL4 1NJ, United Kingdom",
        51.4839,
        -0.6044,
    );
    let supermarket = poi(
        "poi.11",
        "Tesco Extra",
        "Tesco Extra, Windsor, SL4 3EN, United Kingdom",
        51.4781,
        -0.6291,
    );
    let other_castle = poi(
        "poi.12",
        "Castle Inn",
        "Castle Inn, Eton, SL4 6AA, United Kingdom",
        51.4920,
        -0.6080,
    );
    let mock = MockGeocoder::new()
        .with_features("windsor", vec![castle.clone(), supermarket])
        .with_features("windsor landmark", vec![castle, other_castle]);
    let search = search(mock);

    let results = search.search_famous_places("Windsor").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.10"]);
    assert_eq!(results[0].metadata.category, "landmark");
    assert_eq!(search.geocoder().call_count(), FAMOUS_PLACE_SUFFIXES.len());
    assert!(
        search
            .geocoder()
            .calls()
            .iter()
            .all(|c| c.types.as_deref() == Some("poi"))
    );
}

#[tokio::test]
async fn famous_places_collapses_repeated_spaces() {
    let bridge = poi(
        "poi.20",
        "Tower Bridge",
        "Tower Bridge, London, SE1 2UP, United Kingdom",
        51.5055,
        -0.0754,
    );
    let search = search(MockGeocoder::new().with_features("tower bridge", vec![bridge]));

    let spaced = search.search_famous_places("Tower  Bridge").await.unwrap();
    assert_eq!(ids(&spaced), ["mapbox:poi.20"]);
    assert!(search.geocoder().calls().iter().all(|c| !c.text.contains("  ")));

    let calls = search.geocoder().call_count();
    let tidy = search.search_famous_places("Tower Bridge").await.unwrap();
    assert_eq!(ids(&tidy), ["mapbox:poi.20"]);
    assert_eq!(search.geocoder().call_count(), calls);
}

#[tokio::test]
async fn free_text_collapses_repeated_spaces() {
    let search = search(MockGeocoder::new().with_features("heathrow airport", vec![heathrow_poi()]));

    let results = search.search("  Heathrow   Airport ").await.unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.1168231"]);
    let texts: Vec<String> = search.geocoder().calls().into_iter().map(|c| c.text).collect();
    assert_eq!(texts, ["Heathrow Airport", "Heathrow Airport hotel"]);
}

// Terminals

#[tokio::test]
async fn gazetteer_terminals_need_no_network() {
    let search = search(MockGeocoder::unconfigured());

    let results = search
        .search_terminals("heathrow-airport", LocationKind::Airport)
        .await
        .unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].main_text, "Terminal 2");
    assert!(results.iter().all(|s| s.metadata.primary_type == "terminal"));
    assert!(
        results
            .iter()
            .all(|s| s.metadata.parent_place_id.as_deref() == Some("heathrow-airport"))
    );
    assert_eq!(search.geocoder().call_count(), 0);
}

#[tokio::test]
async fn gazetteer_platforms() {
    let search = search(MockGeocoder::new());

    let results = search
        .search_terminals("kings-cross-station", LocationKind::Station)
        .await
        .unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|s| s.metadata.primary_type == "platform"));
    assert_eq!(search.geocoder().call_count(), 0);
}

#[tokio::test]
async fn unknown_location_falls_back_to_provider() {
    let search = search(MockGeocoder::new());

    let results = search
        .search_terminals("some-unknown-airport", LocationKind::Airport)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert!(search.geocoder().call_count() > 0);
    assert_eq!(search.geocoder().calls()[0].text, "some unknown airport");
}

#[tokio::test]
async fn fallback_filters_to_terminals_near_parent() {
    let terminal = poi(
        "poi.301",
        "Farnborough Airport Terminal",
        "Farnborough Airport Terminal, Farnborough, GU14 6XA, United Kingdom",
        51.2790,
        -0.7700,
    );
    let cafe = poi(
        "poi.302",
        "Costa Coffee",
        "Costa Coffee, Farnborough, GU14 7JF, United Kingdom",
        51.2920,
        -0.7540,
    );
    let mock = MockGeocoder::new()
        .with_features("Farnborough Airport terminal", vec![terminal.clone(), cafe])
        .with_features("Farnborough Airport departures", vec![terminal]);
    let search = search(mock);

    let results = search
        .search_terminals("farnborough-airport", LocationKind::Airport)
        .await
        .unwrap();

    assert_eq!(ids(&results), ["mapbox:poi.301"]);
    assert_eq!(results[0].metadata.primary_type, "terminal");
    assert_eq!(results[0].metadata.category, "airport");
    assert_eq!(
        results[0].metadata.parent_place_id.as_deref(),
        Some("farnborough-airport")
    );

    let calls = search.geocoder().calls();
    assert_eq!(calls.len(), 3);
    let parent = search.gazetteer().get("farnborough-airport").unwrap().coordinates;
    assert!(calls.iter().all(|c| c.proximity == Some(parent)));
}

#[tokio::test]
async fn fallback_locates_parent_by_name_hint() {
    let parent = poi(
        "poi.400",
        "Bournemouth Airport",
        "Bournemouth Airport, Christchurch, BH23 6SE, United Kingdom",
        50.7800,
        -1.8425,
    );
    let terminal = poi(
        "poi.401",
        "Bournemouth Airport Departures",
        "Bournemouth Airport Departures, Christchurch, BH23 6SE, United Kingdom",
        50.7795,
        -1.8400,
    );
    let mock = MockGeocoder::new()
        .with_features("Bournemouth Airport", vec![parent])
        .with_features("Bournemouth Airport departures", vec![terminal]);
    let search = search(mock);

    let request = LocationQuery {
        query: "Bournemouth Airport".to_string(),
        ..LocationQuery::terminals("mapbox:poi.400", "airport")
    };
    let response = search.handle(&request).await;

    assert!(response.success);
    let data = response.data.unwrap();
    assert_eq!(ids(&data), ["mapbox:poi.401"]);
    assert_eq!(
        search.geocoder().calls()[0].proximity,
        None,
        "parent lookup is unbiased"
    );
    assert_eq!(
        search.geocoder().calls()[1].proximity,
        Some(Coordinates::new(50.7800, -1.8425))
    );
}

#[tokio::test]
async fn fallback_without_parent_is_empty_success() {
    let search = search(MockGeocoder::new());

    let results = search
        .search_terminals("atlantis-station", LocationKind::Station)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(search.geocoder().call_count(), 1);
}

// Dispatch

#[tokio::test]
async fn end_to_end_free_text() {
    let search = search(
        MockGeocoder::new().with_features("heathrow", vec![heathrow_poi(), heathrow_road()]),
    );

    let response = search.handle(&LocationQuery::free_text("heathrow")).await;

    assert!(response.success);
    assert!(response.error.is_none());
    let data = response.data.unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].metadata.category, "airport");
    assert_eq!(data[1].metadata.primary_type, "address");
}

#[tokio::test]
async fn reference_point_orders_nearest_first() {
    let search = search(
        MockGeocoder::new().with_features("heathrow", vec![heathrow_poi(), heathrow_road()]),
    );

    let guildford = Coordinates::new(51.2362, -0.5704);
    let response = search
        .handle(&LocationQuery::free_text("heathrow").near(guildford))
        .await;

    let data = response.data.unwrap();
    assert_eq!(ids(&data), ["mapbox:address.884", "mapbox:poi.1168231"]);
}

#[tokio::test]
async fn category_mode_requires_id() {
    let search = search(MockGeocoder::new());

    let request = LocationQuery {
        mode: SearchMode::Category,
        ..LocationQuery::default()
    };
    let response = search.handle(&request).await;

    assert!(!response.success);
    assert_eq!(response.error.unwrap().kind, "InvalidRequest");
}

#[tokio::test]
async fn terminals_mode_infers_kind_from_gazetteer() {
    let search = search(MockGeocoder::new());

    let request = LocationQuery {
        category_id: None,
        ..LocationQuery::terminals("paddington-station", "")
    };
    let response = search.handle(&request).await;

    assert!(response.success);
    assert!(!response.data.unwrap().is_empty());
}

#[tokio::test]
async fn terminals_mode_rejects_unknown_kind() {
    let search = search(MockGeocoder::new());

    let response = search
        .handle(&LocationQuery::terminals("heathrow-airport", "seaport"))
        .await;

    assert!(!response.success);
    let error = response.error.unwrap();
    assert_eq!(error.kind, "InvalidRequest");
    assert!(error.message.contains("seaport"));
}

#[tokio::test]
async fn category_not_found_envelope() {
    let search = search(MockGeocoder::new());

    let response = search.handle(&LocationQuery::category("volcanoes")).await;

    assert!(!response.success);
    assert!(response.data.is_none());
    let error = response.error.unwrap();
    assert_eq!(error.kind, "NotFoundError");
    assert!(error.details.contains("airports"));
}

#[test]
fn location_lookup() {
    let search = search(MockGeocoder::new());

    let gatwick = search.location("gatwick-airport").unwrap();
    assert_eq!(gatwick.metadata.primary_type, "airport");

    assert_eq!(
        search.location("narnia-airport").unwrap_err(),
        LocationError::LocationNotFound("narnia-airport".to_string())
    );
}

// Sessions

#[tokio::test(start_paused = true)]
async fn new_search_aborts_previous() {
    let tower = poi(
        "poi.9",
        "Tower Bridge",
        "Tower Bridge, London, SE1 2UP, United Kingdom",
        51.5055,
        -0.0754,
    );
    let mock = MockGeocoder::new()
        .with_features("tower", vec![tower.clone()])
        .with_features("tower bridge", vec![tower])
        .with_delay(Duration::from_millis(500));
    let search = Arc::new(search(mock));
    let session = Arc::new(SearchSession::new(search.clone()));

    let first = tokio::spawn({
        let session = session.clone();
        async move { session.run(&LocationQuery::free_text("tower")).await }
    });
    while search.geocoder().call_count() == 0 {
        tokio::task::yield_now().await;
    }

    let second = session
        .run(&LocationQuery::free_text("tower bridge"))
        .await
        .unwrap();

    assert!(second.success);
    assert!(first.await.unwrap().is_err());
    assert!(search.cache().get(&CacheKey::enhanced("tower")).await.is_none());
    assert!(search.cache().get(&CacheKey::enhanced("tower bridge")).await.is_some());
}

#[tokio::test(start_paused = true)]
async fn cancel_aborts_in_flight_search() {
    let mock = MockGeocoder::new().with_delay(Duration::from_millis(500));
    let search = Arc::new(search(mock));
    let session = Arc::new(SearchSession::new(search.clone()));

    let running = tokio::spawn({
        let session = session.clone();
        async move { session.run(&LocationQuery::free_text("tower")).await }
    });
    while search.geocoder().call_count() == 0 {
        tokio::task::yield_now().await;
    }
    session.cancel();

    assert!(running.await.unwrap().is_err());
}
