pub mod carousel;
pub mod components;
pub mod filters;
pub mod icons;
pub mod not_found;
pub mod resolution;
pub mod url_fragment;
pub mod viewport;
