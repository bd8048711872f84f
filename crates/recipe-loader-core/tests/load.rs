use recipe_loader_core::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const US_SAMPLE: &str = r#"{
  "0": {
    "cuisine": "Southern Recipes",
    "title": "Apple Pie by Grandma Ople",
    "url": "https://example.com/apple-pie",
    "rating": 4.8,
    "prep_time": 30,
    "cook_time": 60,
    "total_time": 90,
    "description": "This was my grandmother's apple pie recipe.",
    "ingredients": ["8 small Granny Smith apples", "0.5 cup unsalted butter"],
    "nutrients": {"calories": "512 kcal", "fatContent": "24 g"},
    "serves": "8"
  },
  "1": {
    "cuisine": "Drinks Recipes",
    "title": "Iced Tea",
    "rating": NaN,
    "prep_time": 5,
    "cook_time": NaN,
    "total_time": 5,
    "description": null,
    "nutrients": {"calories": "2 kcal", "sugarContent": NaN},
    "serves": NaN
  },
  "2": {
    "title": "Mystery Stew"
  }
}"#;

fn write_source(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn open_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(dir.path().join("recipes.db")).unwrap()
}

fn titles(store: &SqliteStore) -> Vec<Option<String>> {
    store
        .fetch_all()
        .unwrap()
        .into_iter()
        .map(|r| r.recipe.title)
        .collect()
}

#[test]
fn loads_every_record_with_nan_nulled() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "US_recipes_null.json", US_SAMPLE);
    let mut store = open_store(&dir);

    let report = Loader::new(&input).load(&mut store).unwrap();
    assert_eq!(
        report,
        LoadReport {
            records: 3,
            nan_replaced: 4,
            inserted: 3,
        }
    );

    let rows = store.fetch_all().unwrap();
    assert_eq!(rows.len(), 3);

    let pie = &rows[0].recipe;
    assert_eq!(pie.cuisine.as_deref(), Some("Southern Recipes"));
    assert_eq!(pie.title.as_deref(), Some("Apple Pie by Grandma Ople"));
    assert_eq!(pie.rating, Some(4.8));
    assert_eq!(pie.prep_time, Some(30.0));
    assert_eq!(pie.cook_time, Some(60.0));
    assert_eq!(pie.total_time, Some(90.0));
    assert_eq!(
        pie.description.as_deref(),
        Some("This was my grandmother's apple pie recipe.")
    );
    let nutrients = pie.nutrients.as_ref().unwrap();
    assert_eq!(nutrients["calories"], "512 kcal");
    assert_eq!(pie.serves, Some(Serves::Text("8".into())));

    let tea = &rows[1].recipe;
    assert_eq!(tea.rating, None);
    assert_eq!(tea.cook_time, None);
    assert_eq!(tea.prep_time, Some(5.0));
    assert_eq!(tea.description, None);
    assert_eq!(tea.serves, None);
    assert_eq!(
        tea.nutrients.as_ref().unwrap()["sugarContent"],
        serde_json::Value::Null
    );

    let stew = &rows[2].recipe;
    assert_eq!(
        stew,
        &Recipe {
            title: Some("Mystery Stew".into()),
            ..Default::default()
        }
    );
}

#[test]
fn full_precision_numbers_survive_the_store() {
    let rating = "0.00010000900081007291";
    let prep = "1.1362275116276523e-8";
    let fat = "2.2250738585072014e-308";
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "precise.json",
        &format!(
            r#"[{{"rating": {rating}, "prep_time": {prep}, "total_time": 17.499999999999996,
                 "nutrients": {{"fatContent": {fat}, "sodium": 0.30000000000000004}}}}]"#
        ),
    );
    let mut store = SqliteStore::in_memory().unwrap();
    load(&input, &mut store).unwrap();

    let rows = store.fetch_all().unwrap();
    let r = &rows[0].recipe;
    assert_eq!(r.rating, Some(rating.parse::<f64>().unwrap()));
    assert_eq!(r.prep_time, Some(prep.parse::<f64>().unwrap()));
    assert_eq!(r.total_time, Some(17.499999999999996));

    let nutrients = r.nutrients.as_ref().unwrap();
    assert_eq!(nutrients["fatContent"].as_f64(), Some(fat.parse::<f64>().unwrap()));
    assert_eq!(nutrients["sodium"].as_f64(), Some(0.30000000000000004));
}

#[test]
fn object_and_array_sources_store_the_same_rows() {
    let dir = TempDir::new().unwrap();
    let keyed = write_source(
        &dir,
        "keyed.json",
        r#"{"a": {"title": "A", "rating": 3.5}, "b": {"title": "B", "serves": 2}}"#,
    );
    let listed = write_source(
        &dir,
        "listed.json",
        r#"[{"title": "A", "rating": 3.5}, {"title": "B", "serves": 2}]"#,
    );

    let mut from_keyed = SqliteStore::in_memory().unwrap();
    let mut from_listed = SqliteStore::in_memory().unwrap();
    load(&keyed, &mut from_keyed).unwrap();
    load(&listed, &mut from_listed).unwrap();

    assert_eq!(from_keyed.fetch_all().unwrap(), from_listed.fetch_all().unwrap());
}

#[test]
fn missing_source_fails_without_rows() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let err = Loader::new(dir.path().join("nope.json"))
        .load(&mut store)
        .unwrap_err();
    assert!(matches!(err, RecipeError::NotFound(_)), "got {err:?}");
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn malformed_source_fails_without_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "broken.json", r#"[{"title": "A"},"#);
    let mut store = open_store(&dir);

    let err = load(&input, &mut store).unwrap_err();
    assert!(matches!(err, RecipeError::Json(_)), "got {err:?}");
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn mistyped_record_fails_without_rows() {
    let dir = TempDir::new().unwrap();
    let input = write_source(
        &dir,
        "typed.json",
        r#"[{"title": "A"}, {"title": "B", "prep_time": "ten minutes"}]"#,
    );
    let mut store = open_store(&dir);

    let err = load(&input, &mut store).unwrap_err();
    match err {
        RecipeError::InvalidRecord { key, .. } => assert_eq!(key, "[1]"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn storage_failure_keeps_table_empty() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("recipes.db");
    let input = write_source(&dir, "two.json", r#"[{"title": "A"}, {"title": "B"}]"#);

    let mut store = SqliteStore::open(&db_path).unwrap();
    store.ensure_schema().unwrap();
    install_reject_trigger(&db_path, "B");

    let err = load(&input, &mut store).unwrap_err();
    assert!(matches!(err, RecipeError::Storage(_)), "got {err:?}");
    assert_eq!(store.count().unwrap(), 0);
    assert!(titles(&store).is_empty());
}

#[test]
fn reruns_append_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "US_recipes_null.json", US_SAMPLE);
    let mut store = open_store(&dir);

    load(&input, &mut store).unwrap();
    load(&input, &mut store).unwrap();
    assert_eq!(store.count().unwrap(), 6);
    assert_eq!(titles(&store)[0], titles(&store)[3]);
}

#[test]
fn store_can_be_passed_as_trait_object() {
    let dir = TempDir::new().unwrap();
    let input = write_source(&dir, "one.json", r#"[{"title": "Only"}]"#);
    let mut sqlite = SqliteStore::in_memory().unwrap();
    let store: &mut dyn RecipeStore = &mut sqlite;

    let report = load(&input, store).unwrap();
    assert_eq!(report.inserted, 1);
    assert_eq!(sqlite.count().unwrap(), 1);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_source_matches_plain_source() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let plain = write_source(&dir, "US_recipes_null.json", US_SAMPLE);
    let gz = dir.path().join("US_recipes_null.json.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&gz).unwrap(), Compression::default());
    encoder.write_all(US_SAMPLE.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let mut from_plain = SqliteStore::in_memory().unwrap();
    let mut from_gz = SqliteStore::in_memory().unwrap();
    let a = load(&plain, &mut from_plain).unwrap();
    let b = load(&gz, &mut from_gz).unwrap();

    assert_eq!(a, b);
    assert_eq!(from_plain.fetch_all().unwrap(), from_gz.fetch_all().unwrap());
}

/// Makes SQLite abort any insert of a recipe titled `title`.
fn install_reject_trigger(db_path: &Path, title: &str) {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.execute_batch(&format!(
        "CREATE TRIGGER reject_title BEFORE INSERT ON recipes
         WHEN NEW.title = '{title}'
         BEGIN SELECT RAISE(ABORT, 'rejected by test'); END;"
    ))
    .unwrap();
}
