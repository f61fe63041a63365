// src/domain/selection.rs

/// Anything with a stable numeric id the UI can point at.
pub trait Identified {
    fn id(&self) -> i64;
}

/// The record currently opened in a detail panel, if any.
///
/// Only the id is kept. It is resolved against whatever collection is live at render time,
/// so a stale id simply resolves to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<i64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected == Some(id)
    }

    pub fn current<'a, T: Identified>(&self, collection: &'a [T]) -> Option<&'a T> {
        let id = self.selected?;
        collection.iter().find(|item| item.id() == id)
    }

    /// Drops the selection when its record is gone from a freshly fetched collection.
    pub fn reconcile<T: Identified>(&mut self, collection: &[T]) {
        if self.current(collection).is_none() {
            self.clear();
        }
    }
}
