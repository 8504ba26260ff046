use gapminder_scenes::error::LoadError;
use gapminder_scenes::loader::coerce_numeric;
use gapminder_scenes::{LoadOptions, load_dataset, load_dataset_async, parse_dataset};

const SAMPLE: &str = "\
country,continent,year,lifeExp,pop,gdpPercap
Afghanistan,Asia,1952,28.801,8425333,779.4453145
Afghanistan,Asia,2007,43.828,31889923,974.5803384
Norway,Europe,2007,80.196,4627926,49357.19017
";

#[test]
fn parses_rows_with_coerced_numeric_columns() {
    let dataset = parse_dataset(SAMPLE.as_bytes(), LoadOptions::default()).expect("parse");

    assert_eq!(dataset.len(), 3);
    let first = &dataset[0];
    assert_eq!(first.country, "Afghanistan");
    assert_eq!(first.continent, "Asia");
    assert_eq!(first.year, 1952.0);
    assert_eq!(first.life_exp, 28.801);
    assert_eq!(first.pop, 8_425_333.0);
    assert_eq!(first.gdp_percap, 779.4453145);

    assert_eq!(dataset[2].country, "Norway");
    assert_eq!(dataset[2].year, 2007.0);
}

#[test]
fn header_only_table_is_an_empty_dataset() {
    let csv = "country,continent,year,lifeExp,pop,gdpPercap\n";
    let dataset = parse_dataset(csv.as_bytes(), LoadOptions::default()).expect("parse");
    assert!(dataset.is_empty());
}

#[test]
fn extra_columns_are_ignored_and_order_does_not_matter() {
    let csv = "\
year,iso,country,gdpPercap,continent,pop,lifeExp
1952,AFG,Afghanistan,779.4,Asia,8425333,28.8
";
    let dataset = parse_dataset(csv.as_bytes(), LoadOptions::default()).expect("parse");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0].life_exp, 28.8);
    assert_eq!(dataset[0].gdp_percap, 779.4);
}

#[test]
fn malformed_numeric_field_becomes_nan_by_default() {
    let csv = "\
country,continent,year,lifeExp,pop,gdpPercap
Atlantis,Oceania,1952,n/a,1000,500
Nowhere,Oceania,1952,,1000,500
";
    let dataset = parse_dataset(csv.as_bytes(), LoadOptions::default()).expect("parse");

    assert!(dataset[0].life_exp.is_nan());
    assert_eq!(dataset[1].life_exp, 0.0, "empty field coerces to zero");
}

#[test]
fn strict_mode_reports_row_and_column_of_malformed_field() {
    let csv = "\
country,continent,year,lifeExp,pop,gdpPercap
Afghanistan,Asia,1952,28.801,8425333,779.4453145
Atlantis,Oceania,1952,n/a,1000,500
";
    let err = parse_dataset(csv.as_bytes(), LoadOptions::strict()).expect_err("strict rejects");

    match err {
        LoadError::MalformedField { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "lifeExp");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_mode_rejects_blank_numeric_field() {
    let csv = "\
country,continent,year,lifeExp,pop,gdpPercap
Atlantis,Oceania,1952,40.0,,500
";
    let lenient = parse_dataset(csv.as_bytes(), LoadOptions::default()).expect("lenient parse");
    assert_eq!(lenient[0].pop, 0.0);

    let err = parse_dataset(csv.as_bytes(), LoadOptions::strict()).expect_err("strict rejects");
    match err {
        LoadError::MalformedField { row, column, value } => {
            assert_eq!(row, 1);
            assert_eq!(column, "pop");
            assert_eq!(value, "");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_column_is_a_table_error() {
    let csv = "country,continent,year,lifeExp,pop\nAfghanistan,Asia,1952,28.801,8425333\n";
    let err = parse_dataset(csv.as_bytes(), LoadOptions::default()).expect_err("missing column");
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn custom_delimiter_is_honored() {
    let tsv = "country\tcontinent\tyear\tlifeExp\tpop\tgdpPercap\nChad\tAfrica\t2007\t50.651\t10238807\t1704.063724\n";
    let dataset =
        parse_dataset(tsv.as_bytes(), LoadOptions::default().with_delimiter(b'\t')).expect("parse");
    assert_eq!(dataset[0].country, "Chad");
    assert_eq!(dataset[0].pop, 10_238_807.0);
}

#[test]
fn coercion_accepts_exponents_and_signed_infinity() {
    assert_eq!(coerce_numeric("1e3"), 1000.0);
    assert_eq!(coerce_numeric("+5"), 5.0);
    assert_eq!(coerce_numeric("Infinity"), f64::INFINITY);
    assert!(coerce_numeric("12abc").is_nan());
    assert!(coerce_numeric("1.2.3").is_nan());
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("gapminder-scenes-does-not-exist.csv");
    let err = load_dataset(&path, LoadOptions::default()).expect_err("missing file");

    match err {
        LoadError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn async_load_matches_sync_load() {
    let path = std::env::temp_dir().join(format!(
        "gapminder-scenes-loader-{}.csv",
        std::process::id()
    ));
    tokio::fs::write(&path, SAMPLE).await.expect("write fixture");

    let sync = load_dataset(&path, LoadOptions::default()).expect("sync load");
    let async_loaded = load_dataset_async(&path, LoadOptions::default())
        .await
        .expect("async load");
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(sync, async_loaded);
    assert_eq!(async_loaded.len(), 3);
}

#[tokio::test]
async fn async_load_of_missing_file_fails() {
    let path = std::env::temp_dir().join("gapminder-scenes-async-missing.csv");
    let result = load_dataset_async(&path, LoadOptions::default()).await;
    assert!(matches!(result, Err(LoadError::Io { .. })));
}
