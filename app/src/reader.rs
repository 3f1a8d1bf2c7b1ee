//! Pure state derivation for the category reader: which items belong to the
//! category, in what order, which one is current, and what sits on either
//! side of it.

use shared_utils::derive_color;

use crate::components::error_template::AppError;
use crate::types::Item;

/// Items of `category_id`, stably sorted by `order` with missing orders as `0`.
#[must_use]
pub fn category_items(items: Vec<Item>, category_id: i64) -> Vec<Item> {
    let mut items: Vec<Item> = items
        .into_iter()
        .filter(|item| item.category == category_id)
        .collect();
    items.sort_by_key(|item| item.order.unwrap_or(0));
    items
}

/// Index of the current item.
///
/// The requested id defaults to the first item's id; an id that is not in
/// `items` clamps to `0`.
#[must_use]
pub fn current_index(items: &[Item], requested: Option<i64>) -> usize {
    let Some(wanted) = requested.or_else(|| items.first().map(|item| item.id)) else {
        return 0;
    };

    items
        .iter()
        .position(|item| item.id == wanted)
        .unwrap_or(0)
}

/// The current item and its neighbours in lesson order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub index: usize,
    pub current: Item,
    pub previous: Option<Item>,
    pub next: Option<Item>,
}

impl Navigation {
    /// `None` when there are no items to navigate.
    #[must_use]
    pub fn new(items: &[Item], requested: Option<i64>) -> Option<Self> {
        let index = current_index(items, requested);
        let current = items.get(index)?.clone();

        Some(Self {
            index,
            current,
            previous: index.checked_sub(1).and_then(|i| items.get(i)).cloned(),
            next: items.get(index + 1).cloned(),
        })
    }
}

/// What fills the reader's media slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemVisual {
    Image(String),
    /// `#RRGGBB` derived from the item's display name.
    Color(String),
}

#[must_use]
pub fn item_visual(item: &Item) -> ItemVisual {
    match item.object_image.as_deref().filter(|src| !src.is_empty()) {
        Some(src) => ItemVisual::Image(src.to_owned()),
        None => ItemVisual::Color(derive_color(item.display_name())),
    }
}

#[must_use]
pub fn item_href(category_id: i64, item_id: i64) -> String {
    format!("/category/{category_id}?item={item_id}")
}

/// Parses the `{id}` route segment.
///
/// # Errors
///
/// [`AppError::InvalidRoute`] when the segment is missing or not an integer.
pub fn parse_category_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.unwrap_or_default();
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidRoute(raw.to_owned()))
}

/// Parses the `?item=` query value; anything unparsable counts as absent.
#[must_use]
pub fn parse_item_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|raw| raw.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn item(id: i64, category: i64, order: Option<i64>) -> Item {
        Item {
            id,
            category,
            name: format!("item-{id}"),
            order,
            ..Default::default()
        }
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn filters_and_sorts_by_order() {
        let items = vec![item(1, 5, Some(2)), item(2, 5, Some(1)), item(3, 6, Some(0))];
        assert_eq!(ids(&category_items(items, 5)), vec![2, 1]);
    }

    #[test]
    fn missing_order_sorts_as_zero_and_ties_keep_fetch_order() {
        let items = vec![
            item(10, 1, Some(1)),
            item(11, 1, None),
            item(12, 1, Some(0)),
            item(13, 1, None),
            item(14, 1, Some(1)),
        ];
        assert_eq!(ids(&category_items(items, 1)), vec![11, 12, 13, 10, 14]);
    }

    #[test]
    fn unknown_category_is_empty() {
        let items = vec![item(1, 5, Some(0))];
        assert!(category_items(items, 99).is_empty());
    }

    #[test]
    fn no_request_selects_first() {
        let items = vec![item(2, 5, Some(1)), item(1, 5, Some(2))];
        assert_eq!(current_index(&items, None), 0);
    }

    #[test]
    fn requested_id_selects_its_index() {
        let items = vec![item(2, 5, Some(1)), item(1, 5, Some(2)), item(7, 5, Some(3))];
        assert_eq!(current_index(&items, Some(7)), 2);
    }

    #[test]
    fn unmatched_request_clamps_to_first() {
        let items = vec![item(2, 5, Some(1)), item(1, 5, Some(2))];
        assert_eq!(current_index(&items, Some(404)), 0);
        assert_eq!(current_index(&[], Some(1)), 0);
    }

    #[test]
    fn navigation_at_boundaries() {
        let items = vec![item(1, 1, Some(0)), item(2, 1, Some(1)), item(3, 1, Some(2))];

        let first = Navigation::new(&items, None).unwrap();
        assert_eq!(first.current.id, 1);
        assert_eq!(first.previous, None);
        assert_eq!(first.next.map(|i| i.id), Some(2));

        let last = Navigation::new(&items, Some(3)).unwrap();
        assert_eq!(last.index, 2);
        assert_eq!(last.previous.map(|i| i.id), Some(2));
        assert_eq!(last.next, None);
    }

    #[test]
    fn navigation_interior_has_both_neighbours() {
        let items = vec![item(1, 1, Some(0)), item(2, 1, Some(1)), item(3, 1, Some(2))];
        let middle = Navigation::new(&items, Some(2)).unwrap();
        assert_eq!(middle.previous.map(|i| i.id), Some(1));
        assert_eq!(middle.next.map(|i| i.id), Some(3));
    }

    #[test]
    fn single_item_has_no_neighbours() {
        let items = vec![item(9, 1, None)];
        let nav = Navigation::new(&items, Some(9)).unwrap();
        assert_eq!(nav.previous, None);
        assert_eq!(nav.next, None);
    }

    #[test]
    fn empty_list_has_no_navigation() {
        assert_eq!(Navigation::new(&[], None), None);
    }

    #[test]
    fn visual_prefers_image() {
        let mut apple = item(1, 1, None);
        apple.object_image = Some("http://203.0.113.5:8000/media/apple.png".to_owned());
        assert_eq!(
            item_visual(&apple),
            ItemVisual::Image("http://203.0.113.5:8000/media/apple.png".to_owned())
        );
    }

    #[test]
    fn visual_falls_back_to_display_name_color() {
        let mut red = item(1, 1, None);
        red.content_name = Some("Red".to_owned());
        red.object_image = Some(String::new());
        assert_eq!(item_visual(&red), ItemVisual::Color(derive_color("Red")));
    }

    #[test]
    fn hrefs_carry_category_and_item() {
        assert_eq!(item_href(5, 12), "/category/5?item=12");
    }

    #[test]
    fn category_id_parsing() {
        assert_eq!(parse_category_id(Some("42")), Ok(42));
        assert_eq!(parse_category_id(Some(" 7 ")), Ok(7));
        assert_matches!(parse_category_id(Some("fruits")), Err(AppError::InvalidRoute(raw)) if raw == "fruits");
        assert_matches!(parse_category_id(None), Err(AppError::InvalidRoute(_)));
    }

    #[test]
    fn item_id_parsing() {
        assert_eq!(parse_item_id(Some("3")), Some(3));
        assert_eq!(parse_item_id(Some("three")), None);
        assert_eq!(parse_item_id(None), None);
    }
}
