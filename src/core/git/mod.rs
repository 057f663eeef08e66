pub mod repo;

pub use repo::{GIT_DIR_NAME, find_repository_dir, find_repository_dir_from, open_repository};
