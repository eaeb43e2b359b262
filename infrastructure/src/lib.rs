pub mod artifact_loader;
pub mod classifier;
pub mod config;
pub mod logistic;
pub mod naive_bayes;
pub mod vectorizer;
