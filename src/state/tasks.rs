//! Per-user task checklist.
//!
//! DESIGN
//! ======
//! Pure list operations so the tasks page only wires signals and storage.
//! The list is saved under `AuthConfig::tasks_key(user_id)` after every edit.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use auth::Item;

/// Ordered checklist owned by one user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskList {
    pub items: Vec<Item>,
}

impl TaskList {
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append an unchecked item. Blank titles are ignored.
    pub fn add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.items.push(Item { title: title.to_owned(), checked: false });
        true
    }

    /// Flip the checked flag at `index`. Out-of-range is a no-op.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.checked = !item.checked;
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Drop every checked item.
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }
}
