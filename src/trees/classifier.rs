//! ID3 Decision Tree Classifier
use super::{
    entropy::choose_best_attribute,
    node::{NodeKind, TreeNode},
    params::{BinaryLabels, Id3Params},
};
use crate::{
    data::dataset::{partition_by, value_counts, Dataset, Record},
    error::Id3Error,
    metrics::confusion::ClassificationMetrics,
};
use nalgebra::DVector;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info, instrument, warn};

/// ID3 Decision Tree Classifier
///
/// Splits on the categorical attribute with the highest information gain until
/// a node is pure or no attributes are left.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier {
    root: Option<Box<TreeNode>>,
    params: Id3Params,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationMetrics for DecisionTreeClassifier {}

impl DecisionTreeClassifier {
    /// Creates a classifier with the default class attribute `class` and labels `Yes`/`No`.
    pub fn new() -> Self {
        Self {
            root: None,
            params: Id3Params::new(),
        }
    }

    /// Creates a new instance of the classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `class_attribute` - Name of the attribute holding the class label.
    /// * `labels` - The positive and negative class literals.
    /// * `parallel` - Whether sibling subtrees are built on the rayon pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the class attribute is empty or the two labels are equal.
    pub fn with_params(
        class_attribute: Option<String>,
        labels: Option<(&str, &str)>,
        parallel: Option<bool>,
    ) -> Result<Self, Id3Error> {
        let mut tree = Self::new();
        if let Some(class_attribute) = class_attribute {
            tree.set_class_attribute(class_attribute)?;
        }
        if let Some((positive, negative)) = labels {
            tree.set_labels(positive, negative)?;
        }
        tree.set_parallel(parallel.unwrap_or(false));
        Ok(tree)
    }

    pub fn set_class_attribute(&mut self, class_attribute: String) -> Result<(), Id3Error> {
        self.params.set_class_attribute(class_attribute)
    }

    pub fn set_labels(&mut self, positive: &str, negative: &str) -> Result<(), Id3Error> {
        self.params.set_labels(positive, negative)
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.params.set_parallel(parallel)
    }

    pub fn class_attribute(&self) -> &str {
        self.params.class_attribute()
    }

    pub fn labels(&self) -> &BinaryLabels {
        self.params.labels()
    }

    pub fn parallel(&self) -> bool {
        self.params.parallel()
    }

    /// The root of the built tree, `None` before [`fit`](Self::fit).
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The training records.
    /// * `attributes` - Candidate split attributes, excluding the class attribute.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::UnknownAttribute`] or [`Id3Error::ClassAttributeAsCandidate`]
    /// for a bad candidate list, and [`Id3Error::MissingKey`] if a record lacks a value
    /// the construction needs.
    #[instrument(skip(self, dataset, attributes), fields(n_records = dataset.len(), n_attributes = attributes.len()))]
    pub fn fit(&mut self, dataset: &Dataset, attributes: &[String]) -> Result<String, Id3Error> {
        for attribute in attributes {
            if attribute == self.class_attribute() {
                return Err(Id3Error::ClassAttributeAsCandidate {
                    attribute: attribute.clone(),
                });
            }
            if !dataset.headers().contains(attribute) {
                return Err(Id3Error::UnknownAttribute {
                    attribute: attribute.clone(),
                });
            }
        }

        let root = self.build_decision_tree(&dataset.view(), attributes)?;
        info!(
            depth = root.depth(),
            n_leaves = root.n_leaves(),
            "decision tree built"
        );
        self.root = Some(Box::new(root));
        Ok("Finished building the tree.".into())
    }

    /// Recursively builds a tree over `records`, splitting on `attributes`.
    ///
    /// An empty `records` yields a single decision node with an empty label.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MissingKey`] if a record lacks the class attribute or a
    /// split attribute.
    pub fn build_decision_tree(
        &self,
        records: &[&Record],
        attributes: &[String],
    ) -> Result<TreeNode, Id3Error> {
        if records.is_empty() {
            warn!("building a tree from zero records");
            return Ok(TreeNode::decision(String::new()));
        }

        let names = attributes.iter().map(String::as_str).collect::<Vec<_>>();
        let remaining = (0..names.len()).collect::<Vec<_>>();
        self.build_tree(records, &names, remaining, 0)
    }

    fn build_tree(
        &self,
        records: &[&Record],
        names: &[&str],
        remaining: Vec<usize>,
        depth: usize,
    ) -> Result<TreeNode, Id3Error> {
        debug_assert!(!records.is_empty(), "partitioning never yields an empty subset");

        let class_counts = value_counts(records, self.class_attribute())?;
        if let [(label, _)] = class_counts.as_slice() {
            debug!(depth, label, n_records = records.len(), "pure leaf");
            return Ok(TreeNode::decision(label.to_string()));
        }

        let majority = Self::majority_class(&class_counts);
        let candidates = remaining.iter().map(|&i| names[i]).collect::<Vec<_>>();
        let Some((best_attribute, information_gain)) =
            choose_best_attribute(records, &candidates, self.class_attribute(), self.labels())?
        else {
            debug!(depth, label = majority, n_records = records.len(), "majority leaf");
            return Ok(TreeNode::decision(majority.to_string()));
        };
        debug!(
            depth,
            attribute = best_attribute,
            information_gain,
            n_records = records.len(),
            "splitting"
        );

        let best_position = candidates
            .iter()
            .position(|&name| name == best_attribute)
            .unwrap_or_default();
        let mut branch_remaining = remaining;
        branch_remaining.remove(best_position);

        let groups = partition_by(records, best_attribute)?;
        let build_child = |(value, subset): (&str, Vec<&Record>)| {
            self.build_tree(&subset, names, branch_remaining.clone(), depth + 1)
                .map(|child| child.with_value(value.to_string()))
        };
        let children = if self.parallel() {
            groups
                .into_par_iter()
                .map(build_child)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            groups
                .into_iter()
                .map(build_child)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(TreeNode::internal(
            best_attribute.to_string(),
            majority.to_string(),
            children,
        ))
    }

    /// First class value reaching the highest count; `counts` is in first-seen order.
    fn majority_class<'a>(counts: &[(&'a str, usize)]) -> &'a str {
        let mut max_count = 0;
        let mut majority = "";
        for &(value, count) in counts {
            if count > max_count {
                max_count = count;
                majority = value;
            }
        }
        majority
    }

    /// Classifies a single record by walking the tree from the root.
    ///
    /// When the record's value has no matching branch, the majority class of the
    /// records that built that split is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::NotFitted`] before [`fit`](Self::fit) and
    /// [`Id3Error::MissingKey`] if the record lacks a split attribute on its path.
    pub fn classify<'a>(&'a self, record: &Record) -> Result<&'a str, Id3Error> {
        let mut node = self.root().ok_or(Id3Error::NotFitted)?;
        loop {
            match node.kind() {
                NodeKind::Decision { label } => return Ok(label.as_str()),
                NodeKind::Internal {
                    attribute,
                    majority,
                    children,
                } => {
                    let value = record.get(attribute)?;
                    match children.iter().find(|child| child.value() == Some(value)) {
                        Some(child) => node = child,
                        None => {
                            debug!(
                                attribute = attribute.as_str(),
                                value,
                                "unseen value, using majority"
                            );
                            return Ok(majority.as_str());
                        }
                    }
                }
            }
        }
    }

    /// Predicts the class label of every record in `dataset`.
    ///
    /// # Errors
    ///
    /// Fails like [`classify`](Self::classify) on the first record that can't be classified.
    pub fn predict(&self, dataset: &Dataset) -> Result<DVector<String>, Id3Error> {
        let predictions = dataset
            .records()
            .iter()
            .map(|record| self.classify(record).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DVector::from_vec(predictions))
    }
}
