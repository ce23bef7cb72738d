use std::ops::Range;

/// Деление галереи проекта на три полноширинных блока.
///
/// Границы: `ceil(n/3)` и `ceil(2n/3)`; диапазоны идут подряд и покрывают
/// все изображения, некоторые могут быть пустыми.
pub fn gallery_sections(len: usize) -> [Range<usize>; 3] {
    let first = len.div_ceil(3);
    let second = (len * 2).div_ceil(3);
    [0..first, first..second, second..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_cover_all() {
        for len in 0..20 {
            let [a, b, c] = gallery_sections(len);
            assert_eq!(a.start, 0);
            assert_eq!(a.end, b.start);
            assert_eq!(b.end, c.start);
            assert_eq!(c.end, len);
        }
    }

    #[test]
    fn test_sections_sizes() {
        assert_eq!(gallery_sections(5), [0..2, 2..4, 4..5]);
        assert_eq!(gallery_sections(6), [0..2, 2..4, 4..6]);
        assert_eq!(gallery_sections(1), [0..1, 1..1, 1..1]);
    }
}
