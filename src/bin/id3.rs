use clap::Parser;
use rusty_id3::data::dataset::Dataset;
use rusty_id3::data::reader::read_csv;
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::classifier::DecisionTreeClassifier;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "id3")]
#[command(about = "Build an ID3 decision tree from a CSV file and print it")]
#[command(version)]
struct Cli {
    /// CSV file; the first line names the attributes
    #[arg(default_value = "./data.csv")]
    data: PathBuf,

    /// Column holding the class label
    #[arg(long, default_value = "class")]
    class: String,

    /// Positive and negative class labels
    #[arg(long, num_args = 2, value_names = ["POSITIVE", "NEGATIVE"], default_values = ["Yes", "No"])]
    labels: Vec<String>,

    /// Comma separated split candidates (defaults to every column except the class)
    #[arg(long, value_delimiter = ',')]
    attributes: Option<Vec<String>>,

    /// Hold out part of the data and report accuracy on it
    #[arg(long)]
    train_size: Option<f64>,

    /// RNG seed for the train/test split
    #[arg(long)]
    seed: Option<u64>,

    /// Build sibling subtrees in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn evaluate(
    classifier: &DecisionTreeClassifier,
    test_dataset: &Dataset,
) -> Result<String, Box<dyn Error>> {
    let y_true = test_dataset.column(classifier.class_attribute())?;
    let y_pred = classifier.predict(test_dataset)?;
    let accuracy = classifier.accuracy(&y_true, &y_pred)?;
    let matrix = classifier.confusion_matrix(&y_true, &y_pred)?;
    Ok(format!("Accuracy: {}%\n{}", accuracy * 100.0, matrix))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dataset = read_csv(&cli.data)?;
    info!(n_records = dataset.len(), "dataset loaded");

    let attributes = cli
        .attributes
        .unwrap_or_else(|| dataset.attributes_except(&cli.class));
    let (positive, negative) = match cli.labels.as_slice() {
        [positive, negative] => (positive.as_str(), negative.as_str()),
        _ => return Err("expected exactly two labels".into()),
    };
    let mut classifier = DecisionTreeClassifier::with_params(
        Some(cli.class),
        Some((positive, negative)),
        Some(cli.parallel),
    )?;

    match cli.train_size {
        Some(train_size) => {
            let (train_dataset, test_dataset) = dataset.train_test_split(train_size, cli.seed)?;
            info!(
                n_train = train_dataset.len(),
                n_test = test_dataset.len(),
                "dataset split"
            );
            classifier.fit(&train_dataset, &attributes)?;
            if let Some(tree) = classifier.root() {
                print!("{}", tree);
            }
            if test_dataset.is_not_empty() {
                println!("{}", evaluate(&classifier, &test_dataset)?);
            }
        }
        None => {
            classifier.fit(&dataset, &attributes)?;
            if let Some(tree) = classifier.root() {
                print!("{}", tree);
            }
        }
    }

    Ok(())
}
