pub mod catalog_kind;
pub mod layout_variant;
pub mod viewport_class;
