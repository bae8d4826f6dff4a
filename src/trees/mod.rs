/// ID3 decision tree classifier
pub mod classifier;
/// Text rendering of trees
pub mod display;
/// Entropy and information gain
pub mod entropy;
/// Tree nodes
pub mod node;
/// Classifier parameters
pub mod params;
