/// Индекс слайдера с автопрокруткой: hero, слайдер услуг, фон детальной страницы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Направление свайпа; `None`, если палец прошёл не дальше порога
pub fn swipe_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance > threshold {
        Some(SwipeDirection::Next)
    } else if distance < -threshold {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            paused: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Тик таймера автопрокрутки. `true`, если слайд сменился.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.next();
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn swipe(&mut self, start_x: f64, end_x: f64, threshold: f64) -> bool {
        match swipe_direction(start_x, end_x, threshold) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Prev) => self.prev(),
            None => return false,
        }
        true
    }

    /// Смещение ленты слайдов в процентах (`translateX(-N%)`)
    pub fn track_offset_percent(&self) -> usize {
        self.current * 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_wrap() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.current(), 2);
        c.next();
        assert_eq!(c.current(), 0);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(2);
        assert_eq!(c.current(), 0);
        assert!(!c.tick());
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut c = Carousel::new(4);
        assert!(c.tick());
        assert_eq!(c.current(), 1);
        c.pause();
        assert!(!c.tick());
        assert_eq!(c.current(), 1);
        c.resume();
        assert!(c.tick());
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_go_to_out_of_range_ignored() {
        let mut c = Carousel::new(3);
        c.go_to(2);
        assert_eq!(c.current(), 2);
        c.go_to(3);
        assert_eq!(c.current(), 2);
        assert_eq!(c.track_offset_percent(), 200);
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(swipe_direction(200.0, 100.0, 50.0), Some(SwipeDirection::Next));
        assert_eq!(swipe_direction(100.0, 200.0, 50.0), Some(SwipeDirection::Prev));
        assert_eq!(swipe_direction(100.0, 140.0, 50.0), None);
        assert_eq!(swipe_direction(100.0, 50.0, 50.0), None);

        let mut c = Carousel::new(3);
        assert!(c.swipe(300.0, 100.0, 50.0));
        assert_eq!(c.current(), 1);
        assert!(!c.swipe(100.0, 120.0, 50.0));
        assert_eq!(c.current(), 1);
    }
}
