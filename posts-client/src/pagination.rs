//! Вспомогательная логика для элементов управления пагинацией.

use crate::constants::pagination::PAGE_WINDOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Элемент строки пагинации.
pub enum PageItem {
    /// Кнопка конкретной страницы.
    Page(u32),
    /// Пропущенный диапазон страниц.
    Ellipsis,
}

/// Номера страниц для отображения: первая, последняя и страницы в пределах
/// двух от текущей. Пропуск из одной страницы показывается самой страницей,
/// более длинный заменяется многоточием.
pub fn page_items(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let visible = |page: u32| page == 1 || page == total || current.abs_diff(page) <= PAGE_WINDOW;

    let mut items = Vec::new();
    let mut previous: Option<u32> = None;
    for page in (1..=total).filter(|page| visible(*page)) {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Ellipsis),
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

/// Страница, которую нужно загрузить после удаления поста.
///
/// Если на не первой странице не осталось постов, нужно перейти на
/// предыдущую; иначе перезагружается текущая.
pub fn page_after_delete(current: u32, remaining_on_page: usize) -> u32 {
    if remaining_on_page == 0 && current > 1 {
        current - 1
    } else {
        current.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn small_page_counts_show_every_page() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
        assert_eq!(page_items(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn ellipsis_on_both_sides_of_current() {
        assert_eq!(
            page_items(10, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20),
            ]
        );
    }

    #[test]
    fn single_gap_is_filled_with_the_page() {
        assert_eq!(
            page_items(5, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn edges_keep_first_and_last() {
        assert_eq!(
            page_items(1, 9),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_items(9, 9),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_items(50, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn delete_of_last_item_steps_back() {
        assert_eq!(page_after_delete(3, 0), 2);
        assert_eq!(page_after_delete(3, 2), 3);
        assert_eq!(page_after_delete(1, 0), 1);
    }
}
