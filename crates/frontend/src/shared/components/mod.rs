pub mod card_animated;
pub mod category_bar;
pub mod page_header;
