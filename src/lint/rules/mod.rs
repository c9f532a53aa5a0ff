//! Built-in lint rules.
//!
//! This module contains all the built-in validation rules that ship with
//! composelint.

pub mod no_build_and_image;
pub mod no_container_name;
pub mod no_duplicate_container_names;
pub mod no_version_field;
pub mod require_project_name;

pub use no_build_and_image::NoBuildAndImageRule;
pub use no_container_name::NoContainerNameRule;
pub use no_duplicate_container_names::NoDuplicateContainerNamesRule;
pub use no_version_field::NoVersionFieldRule;
pub use require_project_name::RequireProjectNameRule;
