pub mod test_bucket_elimination;
pub mod test_labels;
pub mod test_properties;
