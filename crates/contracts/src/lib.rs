//! Контракты сайта студии: контент, селекторы и правила раскладки.
//!
//! Крейт не зависит от браузера, вся логика тестируется нативно.

pub mod domain;
pub mod enums;
pub mod shared;
