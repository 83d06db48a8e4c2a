pub mod batch;
pub mod config;

pub use self::batch::{rotate_all, rotate_all_with, rotate_buffer, rotate_flat, Coefficient};
pub use self::config::{RotationConfig, DEFAULT_CHUNK_SIZE};
