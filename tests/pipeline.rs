//! End-to-end tests: load the bundled CSV, build a tree, render and evaluate it.

use std::path::Path;

use approx::assert_relative_eq;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::reader::{read_csv, read_csv_from};
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::classifier::DecisionTreeClassifier;
use rusty_id3::trees::entropy::{calculate_information_gain, choose_best_attribute};
use rusty_id3::trees::params::BinaryLabels;
use rusty_id3::Id3Error;

fn students() -> Dataset {
    read_csv(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data.csv")).unwrap()
}

fn fit(dataset: &Dataset) -> DecisionTreeClassifier {
    let mut classifier = DecisionTreeClassifier::new();
    classifier
        .fit(dataset, &dataset.attributes_except("class"))
        .unwrap();
    classifier
}

#[test]
fn bundled_csv_loads() {
    let dataset = students();
    assert_eq!(dataset.len(), 14);
    assert_eq!(
        dataset.attributes_except("class"),
        vec!["Math", "Statistics", "Science", "English"]
    );
}

#[test]
fn root_split_has_highest_gain() {
    let dataset = students();
    let classifier = fit(&dataset);
    let root = classifier.root().unwrap();

    let labels = BinaryLabels::default();
    let attributes = ["Math", "Statistics", "Science", "English"];
    let (best, best_gain) = choose_best_attribute(&dataset.view(), &attributes, "class", &labels)
        .unwrap()
        .unwrap();
    assert_eq!(root.split_attribute(), Some(best));

    for attribute in attributes {
        let gain = calculate_information_gain(&dataset.view(), attribute, "class", &labels).unwrap();
        assert!(best_gain >= gain, "{attribute} beats {best}");
    }
}

#[test]
fn training_records_are_reproduced() {
    let dataset = students();
    let classifier = fit(&dataset);

    let y_true = dataset.column("class").unwrap();
    let y_pred = classifier.predict(&dataset).unwrap();
    assert_relative_eq!(classifier.accuracy(&y_true, &y_pred).unwrap(), 1.0);
}

#[test]
fn rendered_tree_lists_every_leaf() {
    let dataset = students();
    let classifier = fit(&dataset);
    let root = classifier.root().unwrap();
    let rendered = root.to_string();

    assert!(rendered.starts_with("|---"));
    assert!(rendered.lines().all(|line| line.starts_with('|')));
    assert_eq!(
        rendered.lines().filter(|l| l.contains("Decision:")).count(),
        root.n_leaves()
    );
}

#[test]
fn hold_out_evaluation() {
    let dataset = students();
    let (train, test) = dataset.train_test_split(0.7, Some(42)).unwrap();
    let classifier = fit(&train);

    let y_true = test.column("class").unwrap();
    let y_pred = classifier.predict(&test).unwrap();
    let matrix = classifier.confusion_matrix(&y_true, &y_pred).unwrap();
    let accuracy = classifier.accuracy(&y_true, &y_pred).unwrap();

    assert_eq!(matrix.total(), test.len());
    assert!((0.0..=1.0).contains(&accuracy));
}

#[test]
fn missing_class_column_fails_fast() {
    let dataset = read_csv_from("Math,label\nA,Yes\nB,No\n".as_bytes()).unwrap();
    let mut classifier = DecisionTreeClassifier::new();
    let result = classifier.fit(&dataset, &["Math".to_string()]);
    assert!(matches!(result, Err(Id3Error::MissingKey { .. })));
}
