pub mod preflight;
pub mod writer;

pub use preflight::prepare_target;
pub use writer::{ensure_dir, write_file};
