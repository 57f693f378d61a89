pub mod cached;
pub mod min_distance;
pub mod norm_matrix;
