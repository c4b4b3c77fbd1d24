// Standalone components
pub mod dropdown;
pub mod navbar;

// Depends on dropdown and navbar
pub mod user_type_selector;

// Re-exports for convenience
pub use dropdown::*;
pub use navbar::*;
pub use user_type_selector::*;
