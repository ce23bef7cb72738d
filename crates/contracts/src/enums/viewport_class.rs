use serde::{Deserialize, Serialize};

/// Класс ширины окна, по которому выбирается сетка карточек
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    /// Ширина меньше этой границы считается мобильной
    pub const MOBILE_BELOW: f64 = 481.0;
    /// Ширина меньше этой границы считается планшетной
    pub const TABLET_BELOW: f64 = 1025.0;

    /// Классификация по стандартным границам (481 / 1025)
    pub fn from_width(width: f64) -> Self {
        Self::classify(width, Self::MOBILE_BELOW, Self::TABLET_BELOW)
    }

    pub fn classify(width: f64, mobile_below: f64, tablet_below: f64) -> Self {
        if width < mobile_below {
            ViewportClass::Mobile
        } else if width < tablet_below {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViewportClass::Mobile => "mobile",
            ViewportClass::Tablet => "tablet",
            ViewportClass::Desktop => "desktop",
        }
    }
}
