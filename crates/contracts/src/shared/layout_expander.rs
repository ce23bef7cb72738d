//! Layout Expander: раскладка выбранных записей по визуальной сетке.
//!
//! Варианты берутся циклически из таблицы, выбранной по классу ширины окна.
//! Запись не копируется: карточка держит `Arc` на исходную запись и
//! собственный ключ `"{id}-{i}"`, который различает повторы при добивке.

use std::sync::Arc;

use crate::domain::common::CatalogRecord;
use crate::enums::layout_variant::LayoutVariant;
use crate::enums::viewport_class::ViewportClass;

use LayoutVariant::{Landscape, Portrait, Square};

pub const DESKTOP_PATTERN: [LayoutVariant; 12] = [
    Portrait, Landscape, Square, Landscape, Portrait, Square, Square, Portrait, Landscape,
    Portrait, Square, Landscape,
];

pub const TABLET_PATTERN: [LayoutVariant; 6] = [
    LayoutVariant::Masonry { height_px: 420 },
    LayoutVariant::Masonry { height_px: 300 },
    LayoutVariant::Masonry { height_px: 360 },
    LayoutVariant::Masonry { height_px: 300 },
    LayoutVariant::Masonry { height_px: 420 },
    LayoutVariant::Masonry { height_px: 360 },
];

pub const MOBILE_PATTERN: [LayoutVariant; 3] = [
    LayoutVariant::Masonry { height_px: 360 },
    LayoutVariant::Masonry { height_px: 260 },
    LayoutVariant::Masonry { height_px: 300 },
];

pub fn pattern_for(viewport: ViewportClass) -> &'static [LayoutVariant] {
    match viewport {
        ViewportClass::Mobile => &MOBILE_PATTERN,
        ViewportClass::Tablet => &TABLET_PATTERN,
        ViewportClass::Desktop => &DESKTOP_PATTERN,
    }
}

/// Сколько карточек выдать
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Одна карточка на запись
    None,
    /// Ровно `n` карточек: вход повторяется по кругу (или обрезается)
    ToCount(usize),
}

/// Карточка, готовая к отрисовке
#[derive(Debug)]
pub struct ExpandedCard<T> {
    pub record: Arc<T>,
    pub variant: LayoutVariant,
    /// Число строк сетки для masonry-вариантов
    pub span: Option<u32>,
    pub unique_key: String,
}

impl<T> Clone for ExpandedCard<T> {
    fn clone(&self) -> Self {
        Self {
            record: Arc::clone(&self.record),
            variant: self.variant,
            span: self.span,
            unique_key: self.unique_key.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutExpander {
    row_unit_px: u32,
}

impl Default for LayoutExpander {
    fn default() -> Self {
        Self { row_unit_px: 10 }
    }
}

impl LayoutExpander {
    pub fn new(row_unit_px: u32) -> Self {
        Self { row_unit_px }
    }

    pub fn expand<T: CatalogRecord>(
        &self,
        records: &[Arc<T>],
        viewport: ViewportClass,
        padding: Padding,
    ) -> Vec<ExpandedCard<T>> {
        if records.is_empty() {
            return Vec::new();
        }

        let pattern = pattern_for(viewport);
        let count = match padding {
            Padding::None => records.len(),
            Padding::ToCount(n) => n,
        };

        (0..count)
            .map(|i| {
                let record = Arc::clone(&records[i % records.len()]);
                let variant = pattern[i % pattern.len()];
                ExpandedCard {
                    unique_key: format!("{}-{}", record.id(), i),
                    span: variant.row_span(self.row_unit_px),
                    variant,
                    record,
                }
            })
            .collect()
    }
}
