pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact_form;
pub mod content;
pub mod gallery;
pub mod layout_expander;
pub mod routing;
