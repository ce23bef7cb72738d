/// Визуальный вариант карточки в сетке. К данным записи отношения не имеет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    Portrait,
    Landscape,
    Square,
    /// Колонка masonry с фиксированной высотой
    Masonry { height_px: u32 },
}

impl LayoutVariant {
    pub fn code(&self) -> &'static str {
        match self {
            LayoutVariant::Portrait => "portrait",
            LayoutVariant::Landscape => "landscape",
            LayoutVariant::Square => "square",
            LayoutVariant::Masonry { .. } => "masonry",
        }
    }

    /// CSS-класс карточки, например `project-card-portrait`
    pub fn css_class(&self) -> String {
        format!("project-card-{}", self.code())
    }

    /// Сколько строк сетки занимает карточка: высота / шаг строки, с округлением вверх.
    /// Есть только у masonry-вариантов.
    pub fn row_span(&self, row_unit_px: u32) -> Option<u32> {
        match self {
            LayoutVariant::Masonry { height_px } => Some(height_px.div_ceil(row_unit_px.max(1))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_span_rounds_up() {
        let v = LayoutVariant::Masonry { height_px: 305 };
        assert_eq!(v.row_span(10), Some(31));
        assert_eq!(LayoutVariant::Masonry { height_px: 300 }.row_span(10), Some(30));
    }

    #[test]
    fn test_shapes_have_no_span() {
        assert_eq!(LayoutVariant::Portrait.row_span(10), None);
        assert_eq!(LayoutVariant::Square.css_class(), "project-card-square");
    }

    #[test]
    fn test_zero_row_unit_does_not_panic() {
        assert_eq!(LayoutVariant::Masonry { height_px: 12 }.row_span(0), Some(12));
    }
}
