//! Route Resolver: slug детальной страницы -> запись, фрагмент URL -> категория.

pub mod category_filter;
pub mod resolution;

pub use category_filter::{category_from_fragment, fragment_for, CategoryFilter, FilterTicket};
pub use resolution::{
    resolve_slug, InlineNotFound, NotFoundAction, NotFoundPolicy, RedirectToList, Resolution,
};
