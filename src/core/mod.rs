pub mod config;
pub mod norm;
pub mod norm_matrix;
pub mod norm_mode;
pub mod observations;
pub(crate) mod pair_cache;
