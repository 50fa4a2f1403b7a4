pub mod cache;

pub use cache::cache_control_middleware;
