//! Временное сообщение об успешном создании поста.

/// Видимость баннера. Каждый показ получает свой номер; скрыть баннер может
/// только таймер последнего показа.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SuccessBanner {
    visible: bool,
    shown: u32,
}

impl SuccessBanner {
    /// Показывает баннер и возвращает номер показа для таймера.
    pub(crate) fn show(&mut self) -> u32 {
        self.shown = self.shown.wrapping_add(1);
        self.visible = true;
        self.shown
    }

    /// Скрывает баннер, если после показа `token` не было нового.
    pub(crate) fn hide(&mut self, token: u32) {
        if token == self.shown {
            self.visible = false;
        }
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_hides_after_its_own_timer() {
        let mut banner = SuccessBanner::default();
        assert!(!banner.is_visible());

        let token = banner.show();
        assert!(banner.is_visible());

        banner.hide(token);
        assert!(!banner.is_visible());
    }

    #[test]
    fn earlier_timer_does_not_hide_newer_banner() {
        let mut banner = SuccessBanner::default();
        let first = banner.show();
        let second = banner.show();

        banner.hide(first);
        assert!(banner.is_visible());

        banner.hide(second);
        assert!(!banner.is_visible());
    }
}
