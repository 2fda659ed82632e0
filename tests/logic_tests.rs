use nongkrong::core::filter::{PlaceFilter, hours_options, price_options};
use nongkrong::core::import::{ImportLogic, read_rows};
use nongkrong::core::places::{PlaceChanges, PlaceLogic};
use nongkrong::core::session::Session;
use nongkrong::db::pool::DbPool;
use nongkrong::db::queries::{insert_place, list_places};
use nongkrong::errors::AppError;
use nongkrong::models::place::marker_color;
use std::fs;
use std::path::Path;

mod common;
use common::{ADMIN, sample, setup_test_db, temp_out, test_config, warkop_a};

const DATASET: &str = "\
Nama,Jam Buka,Harga,Latitude,Longitude,Foto,Rating,Komentar
Burjo Barokah,24 Jam,Murah,-7.0531,110.4372,,4.1,murah meriah
Kopi Kenangan Tembalang,Nggak 24 Jam,Mending Mahal,-7.0555,110.4389,https://example.org/k.jpg,4.4,
Kafe Awan,Nggak 24 Jam,Mahal,-7.0602,110.4411,,4.7,view bagus
";

#[test]
fn test_session_trims_and_detects_admin() {
    let cfg = test_config("unused.sqlite");

    assert!(!Session::new(None, &cfg).is_logged_in());
    assert!(!Session::new(Some("   "), &cfg).is_logged_in());

    let alice = Session::new(Some(" alice "), &cfg);
    assert_eq!(alice.username(), Some("alice"));
    assert!(!alice.is_admin());

    assert!(Session::new(Some(ADMIN), &cfg).is_admin());
}

#[test]
fn test_add_requires_login() {
    let db_path = setup_test_db("logic_add_login");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");

    let err = PlaceLogic::add(&pool, &Session::anonymous(), &cfg, &warkop_a()).unwrap_err();
    assert!(matches!(err, AppError::NotLoggedIn));
    assert!(list_places(&pool.conn).expect("list").is_empty());

    let alice = Session::new(Some("alice"), &cfg);
    let id = PlaceLogic::add(&pool, &alice, &cfg, &warkop_a()).expect("add");
    let all = list_places(&pool.conn).expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    assert_eq!(all[0].creator, "alice");
}

#[test]
fn test_add_validates_form_fields() {
    let db_path = setup_test_db("logic_add_validate");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");
    let alice = Session::new(Some("alice"), &cfg);

    let mut bad_hours = warkop_a();
    bad_hours.hours = "Kadang buka".to_string();
    assert!(matches!(
        PlaceLogic::add(&pool, &alice, &cfg, &bad_hours),
        Err(AppError::InvalidHours(_))
    ));

    let mut bad_price = warkop_a();
    bad_price.price = "Gratis".to_string();
    assert!(matches!(
        PlaceLogic::add(&pool, &alice, &cfg, &bad_price),
        Err(AppError::InvalidPrice(_))
    ));

    let mut bad_rating = warkop_a();
    bad_rating.rating = 5.5;
    assert!(matches!(
        PlaceLogic::add(&pool, &alice, &cfg, &bad_rating),
        Err(AppError::InvalidRating(_))
    ));

    assert!(list_places(&pool.conn).expect("list").is_empty());
}

#[test]
fn test_edit_and_delete_are_admin_only() {
    let db_path = setup_test_db("logic_admin_only");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");
    let id = insert_place(&pool.conn, &warkop_a(), "alice").expect("insert");

    let alice = Session::new(Some("alice"), &cfg);
    let changes = PlaceChanges {
        rating: Some(5.0),
        ..PlaceChanges::default()
    };

    assert!(matches!(
        PlaceLogic::edit(&pool, &alice, &cfg, id, &changes),
        Err(AppError::NotAdmin(_))
    ));
    assert!(matches!(
        PlaceLogic::delete(&pool, &alice, id),
        Err(AppError::NotAdmin(_))
    ));
    assert!(matches!(
        PlaceLogic::delete(&pool, &Session::anonymous(), id),
        Err(AppError::NotLoggedIn)
    ));

    assert_eq!(list_places(&pool.conn).expect("list").len(), 1);
}

#[test]
fn test_edit_overlays_given_fields() {
    let db_path = setup_test_db("logic_edit");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");
    let id = insert_place(&pool.conn, &warkop_a(), "alice").expect("insert");

    let admin = Session::new(Some(ADMIN), &cfg);
    let changes = PlaceChanges {
        comment: Some("makin enak".to_string()),
        rating: Some(4.6),
        ..PlaceChanges::default()
    };

    let updated = PlaceLogic::edit(&pool, &admin, &cfg, id, &changes)
        .expect("edit")
        .expect("place exists");

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Warkop A");
    assert_eq!(updated.comment, "makin enak");
    assert_eq!(updated.rating, 4.6);
    assert_eq!(updated.creator, "alice");

    assert_eq!(list_places(&pool.conn).expect("list")[0], updated);
}

#[test]
fn test_edit_checks_only_changed_fields() {
    let db_path = setup_test_db("logic_edit_partial");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");
    // imported rows may carry labels outside the configured options
    let id = insert_place(&pool.conn, &sample("Resto Atas", "24 Jam", "Super Mahal"), "")
        .expect("insert");

    let admin = Session::new(Some(ADMIN), &cfg);
    let comment_only = PlaceChanges {
        comment: Some("view bagus".to_string()),
        ..PlaceChanges::default()
    };
    let updated = PlaceLogic::edit(&pool, &admin, &cfg, id, &comment_only)
        .expect("edit")
        .expect("place exists");
    assert_eq!(updated.price, "Super Mahal");
    assert_eq!(updated.comment, "view bagus");

    let bad_price = PlaceChanges {
        price: Some("Gratis".to_string()),
        ..PlaceChanges::default()
    };
    assert!(matches!(
        PlaceLogic::edit(&pool, &admin, &cfg, id, &bad_price),
        Err(AppError::InvalidPrice(p)) if p == "Gratis"
    ));
    let bad_rating = PlaceChanges {
        rating: Some(0.5),
        ..PlaceChanges::default()
    };
    assert!(matches!(
        PlaceLogic::edit(&pool, &admin, &cfg, id, &bad_rating),
        Err(AppError::InvalidRating(_))
    ));

    assert_eq!(list_places(&pool.conn).expect("list")[0].price, "Super Mahal");
}

#[test]
fn test_edit_and_delete_unknown_id_are_soft() {
    let db_path = setup_test_db("logic_unknown_id");
    let cfg = test_config(&db_path);
    let pool = DbPool::open(&db_path).expect("open store");
    let admin = Session::new(Some(ADMIN), &cfg);

    let changes = PlaceChanges {
        name: Some("Hantu".to_string()),
        ..PlaceChanges::default()
    };
    assert!(PlaceLogic::edit(&pool, &admin, &cfg, 7, &changes)
        .expect("edit")
        .is_none());
    assert!(!PlaceLogic::delete(&pool, &admin, 7).expect("delete"));
}

#[test]
fn test_filter_by_hours_and_price() {
    let places = vec![
        sample("A", "24 Jam", "Murah"),
        sample("B", "Nggak 24 Jam", "Murah"),
        sample("C", "24 Jam", "Mahal"),
        sample("D", "Nggak 24 Jam", "Mending Mahal"),
    ];

    assert_eq!(PlaceFilter::default().apply(&places).len(), 4);

    let only_24h = PlaceFilter::new(vec!["24 Jam".to_string()], vec![]);
    let names: Vec<&str> = only_24h.apply(&places).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);

    let cheap_24h = PlaceFilter::new(vec!["24 Jam".to_string()], vec!["Murah".to_string()]);
    let names: Vec<&str> = cheap_24h.apply(&places).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["A"]);

    let nothing = PlaceFilter::new(vec![], vec!["Gratis".to_string()]);
    assert!(nothing.apply(&places).is_empty());

    assert_eq!(hours_options(&places), vec!["24 Jam", "Nggak 24 Jam"]);
    assert_eq!(price_options(&places), vec!["Murah", "Mahal", "Mending Mahal"]);
}

#[test]
fn test_marker_colors() {
    assert_eq!(marker_color("Murah"), "green");
    assert_eq!(marker_color("mending mahal"), "orange");
    assert_eq!(marker_color("Mahal"), "red");
    assert_eq!(marker_color("???"), "red");
    assert_eq!(
        warkop_a().maps_url(),
        "https://www.google.com/maps/search/?api=1&query=-7.05,110.44"
    );
}

#[test]
fn test_read_rows_parses_dataset() {
    let places = read_rows(DATASET.as_bytes()).expect("parse");
    assert_eq!(places.len(), 3);

    assert_eq!(places[0].name, "Burjo Barokah");
    assert_eq!(places[0].photo, "");
    assert_eq!(places[1].price, "Mending Mahal");
    assert_eq!(places[1].comment, "");
    assert_eq!(places[2].rating, 4.7);
    assert!(places.iter().all(|p| p.id == 0 && p.creator.is_empty()));
}

#[test]
fn test_import_file_inserts_without_creator() {
    let db_path = setup_test_db("logic_import");
    let csv_path = temp_out("logic_import", "csv");
    fs::write(&csv_path, DATASET).expect("write csv");

    let mut pool = DbPool::open(&db_path).expect("open store");
    let count = ImportLogic::import_file(&mut pool, Path::new(&csv_path)).expect("import");
    assert_eq!(count, 3);

    let all = list_places(&pool.conn).expect("list");
    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(all.iter().all(|p| p.creator.is_empty()));
}

#[test]
fn test_import_bad_row_writes_nothing() {
    let db_path = setup_test_db("logic_import_bad");
    let csv_path = temp_out("logic_import_bad", "csv");
    fs::write(
        &csv_path,
        format!("{DATASET}Rusak,24 Jam,Murah,not-a-number,110.44,,4.0,\n"),
    )
    .expect("write csv");

    let mut pool = DbPool::open(&db_path).expect("open store");
    let err = ImportLogic::import_file(&mut pool, Path::new(&csv_path)).unwrap_err();
    match err {
        AppError::Import(msg) => assert!(msg.contains("line 5"), "message: {msg}"),
        other => panic!("unexpected error: {other}"),
    }

    assert!(list_places(&pool.conn).expect("list").is_empty());
}
