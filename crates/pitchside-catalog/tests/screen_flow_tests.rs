//! End-to-end flows as a list screen drives them: load a snapshot, build
//! chip rows, parse the search box, search, toggle marks, reset.

use pitchside_catalog::{
    clear_mark_field, facet_values, load_catalog, parse_query, search, toggle_mark, CatalogQuery,
    MarkField, MarkSet, NumericRange, SortKey,
};

const GEAR_SHOP: &str = r#"[
    {
        "id": "gear-ball",
        "text_fields": ["Match Ball", "FIFA quality pro ball", "balls"],
        "facets": {"category": "balls", "sport": "soccer"},
        "numeric_fields": {"price": 20.0, "rating": 4.5, "score": 88.0, "popularity": 900.0}
    },
    {
        "id": "gear-boots",
        "text_fields": ["Speed Boots", "Firm ground cleats", "footwear"],
        "facets": {"category": "footwear", "sport": "soccer"},
        "numeric_fields": {"price": 79.0, "rating": 4.8, "score": 95.0, "popularity": 1200.0}
    },
    {
        "id": "gear-goal",
        "text_fields": ["Portable Goal", "Foldable training goal"],
        "facets": {"category": "training", "sport": "soccer"},
        "numeric_fields": {"price": 399.0, "rating": 4.1, "score": 80.0, "popularity": 150.0}
    },
    {
        "id": "gear-poster",
        "text_fields": ["Legends Poster", "Wall art"],
        "facets": {"category": "accessories", "sport": "soccer"},
        "numeric_fields": {"rating": 3.9, "score": 60.0, "popularity": 40.0}
    }
]"#;

#[test]
fn gear_shop_screen_flow() {
    let catalog = load_catalog(GEAR_SHOP).unwrap();

    // Chip row for the category facet.
    assert_eq!(
        facet_values(&catalog, "category"),
        vec!["all", "accessories", "balls", "footwear", "training"]
    );

    // User types a combined expression into the search box.
    let query = parse_query("category:all price:0..100 sort:price-asc");
    let result = search(&catalog, &query, &MarkSet::new());
    let ids: Vec<&str> = result.iter().map(|r| r.item.id.as_str()).collect();
    // The poster has no price, so the range filter drops it.
    assert_eq!(ids, vec!["gear-ball", "gear-boots"]);

    // Favoriting the boots survives a query change.
    let marks = toggle_mark(&MarkSet::new(), "gear-boots", MarkField::Favorited);
    let query = CatalogQuery::new().with_sort(SortKey::RatingDesc);
    let result = search(&catalog, &query, &marks);
    let ids: Vec<&str> = result.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["gear-boots", "gear-ball", "gear-goal", "gear-poster"]);
    assert!(result[0].marks.favorited);
    assert!(!result[1].marks.favorited);

    // "Clear favorites" wipes the flag but keeps other marks.
    let marks = toggle_mark(&marks, "gear-ball", MarkField::Booked);
    let marks = clear_mark_field(&marks, MarkField::Favorited);
    let result = search(&catalog, &query, &marks);
    assert!(result.iter().all(|r| !r.marks.favorited));
    assert!(result.iter().any(|r| r.item.id == "gear-ball" && r.marks.booked));

    // "Reset filters" restores the pristine relevance-ordered list.
    let pristine = search(&catalog, &CatalogQuery::new(), &MarkSet::new());
    let ids: Vec<&str> = pristine.iter().map(|r| r.item.id.as_str()).collect();
    assert_eq!(ids, vec!["gear-boots", "gear-ball", "gear-goal", "gear-poster"]);
    let again = search(&catalog, &CatalogQuery::new(), &MarkSet::new());
    assert_eq!(pristine, again);
}

#[test]
fn missing_sort_field_ranks_last_in_price_desc() {
    let catalog = load_catalog(GEAR_SHOP).unwrap();
    let query = CatalogQuery::new().with_sort(SortKey::PriceDesc);
    let result = search(&catalog, &query, &MarkSet::new());
    let ids: Vec<&str> = result.iter().map(|r| r.item.id.as_str()).collect();
    // The unpriced poster sorts last even under a descending sort.
    assert_eq!(ids, vec!["gear-goal", "gear-boots", "gear-ball", "gear-poster"]);
}

#[test]
fn catalog_reload_keeps_marks_for_surviving_ids() {
    let catalog = load_catalog(GEAR_SHOP).unwrap();
    let marks = toggle_mark(&MarkSet::new(), "gear-ball", MarkField::Favorited);

    // Refresh drops the poster and reorders the rest; marks keyed by id
    // still attach.
    let reloaded: Vec<_> = catalog
        .iter()
        .filter(|i| i.id != "gear-poster")
        .rev()
        .cloned()
        .collect();
    let result = search(&reloaded, &CatalogQuery::new(), &marks);
    assert!(result
        .iter()
        .any(|r| r.item.id == "gear-ball" && r.marks.favorited));
}

#[test]
fn narrowing_text_search_matches_any_field() {
    let catalog = load_catalog(GEAR_SHOP).unwrap();
    // "foot" only appears in the boots' tag field.
    let result = search(&catalog, &CatalogQuery::new().with_text("foot"), &MarkSet::new());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item.id, "gear-boots");
}

#[test]
fn range_and_facet_filters_compose() {
    let catalog = load_catalog(GEAR_SHOP).unwrap();
    let query = CatalogQuery::new()
        .with_facet("category", "balls")
        .with_range("rating", NumericRange::at_least(4.0));
    let result = search(&catalog, &query, &MarkSet::new());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item.id, "gear-ball");
}
