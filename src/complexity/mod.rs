//! Complexity pipeline: function boundary extraction and branch-depth
//! scoring.

mod boundaries;
mod depth;

pub use boundaries::{count_params, extract_functions};
pub use depth::max_branch_depth;
