pub(crate) mod preprocess;
pub(crate) mod validate;
