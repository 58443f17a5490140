use chrono::NaiveDate;
use gamedex_core::*;

fn game(title: &str, year: i32) -> VideoGame {
    VideoGame::new(
        title,
        "Some Studio",
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        10,
    )
}

#[test]
fn new_catalog_is_empty() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.all().is_empty());
}

#[test]
fn add_reports_change() {
    let mut catalog = Catalog::new();
    assert!(catalog.add(vec![game("Doom", 1993), game("Quake", 1996)]));
    assert_eq!(catalog.len(), 2);

    assert!(!catalog.add(Vec::new()));
    assert_eq!(catalog.len(), 2);
}

#[test]
fn add_preserves_order_and_duplicates() {
    let mut catalog = Catalog::new();
    catalog.add(vec![game("Doom", 1993)]);
    catalog.add(vec![game("Quake", 1996), game("Doom", 2016)]);

    let titles: Vec<&str> = catalog.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Doom", "Quake", "Doom"]);
}

#[test]
fn add_accepts_malformed_values() {
    let mut bad = game("Broken", 2000);
    bad.estimated_hours = -5;
    let mut catalog = Catalog::new();
    assert!(catalog.add([bad]));
    assert_eq!(catalog.all()[0].estimated_hours, -5);
}

#[test]
fn collect_and_extend() {
    let mut catalog: Catalog = vec![game("Doom", 1993)].into_iter().collect();
    catalog.extend(vec![game("Quake", 1996)]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.all()[1].title, "Quake");
}

#[test]
fn add_then_lookup_by_title_ignores_case() {
    let mut catalog = Catalog::new();
    catalog.add(vec![game("Final Fantasy VII", 1997)]);

    let found = by_title(&catalog, "FINAL fantasy vii").unwrap();
    assert_eq!(found.title, "Final Fantasy VII");
    assert_eq!(found.release_year(), 1997);
}

#[test]
fn catalog_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Catalog>();

    let catalog = std::sync::Arc::new(
        vec![game("Doom", 1993), game("Quake", 1996)]
            .into_iter()
            .collect::<Catalog>(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || released_before_year(&catalog, 1995).len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}
