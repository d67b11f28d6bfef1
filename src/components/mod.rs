pub mod viewport_lock;

pub use viewport_lock::ViewportScaleLock;
