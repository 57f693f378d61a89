pub mod euclidean;
pub mod max_norm;
