use crate::item_ids::format_item_ids;

/// Item ids picked on a form or filter screen.
///
/// Selecting an absent id and toggling it again restores the previous
/// selection exactly, order included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection {
    ids: Vec<i32>,
}

impl ItemSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if absent, deselect it otherwise. Returns whether `id` is
    /// selected afterwards.
    pub fn toggle(&mut self, id: i32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Value for the `items` form field or query parameter.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format_item_ids(&self.ids)
    }
}

impl FromIterator<i32> for ItemSelection {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selects_then_deselects() {
        let mut selection = ItemSelection::new();
        assert!(selection.toggle(2));
        assert!(selection.contains(2));
        assert!(!selection.toggle(2));
        assert!(selection.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_selection() {
        let mut selection: ItemSelection = [4, 1, 6].into_iter().collect();
        let before = selection.clone();

        selection.toggle(3);
        selection.toggle(3);
        assert_eq!(selection, before);

        selection.toggle(1);
        selection.toggle(1);
        // Re-selecting appends, so order differs from before for a removed id.
        assert_eq!(selection.ids(), &[4, 6, 1]);
    }

    #[test]
    fn query_value_lists_ids_in_selection_order() {
        let mut selection = ItemSelection::new();
        selection.toggle(3);
        selection.toggle(1);
        assert_eq!(selection.to_query_value(), "3,1");
    }

    #[test]
    fn collect_ignores_duplicates() {
        let selection: ItemSelection = [1, 1, 2].into_iter().collect();
        assert_eq!(selection.ids(), &[1, 2]);
    }
}
