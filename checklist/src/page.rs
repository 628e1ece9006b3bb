//! Headless page controller.
//!
//! Holds the bits of UI state that are not part of the list (the input text
//! and the selected tab) and forwards user intents to a [`TodoStore`].

use crate::store::TodoStore;
use crate::types::TodoId;
use crate::view::{self, Tab, TodoView};

/// The checklist page, minus rendering
#[derive(Debug, Clone)]
pub struct TodoPage<S: TodoStore> {
    store: S,
    input: String,
    tab: Tab,
}

impl<S: TodoStore> TodoPage<S> {
    /// Creates a page over `store` with empty input and the `All` tab
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            input: String::new(),
            tab: Tab::default(),
        }
    }

    /// The backing store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the add control is enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        view::can_submit(&self.input)
    }

    /// Adds the input as a todo and clears it.
    ///
    /// Returns false without touching the store when the input is blank.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let name = std::mem::take(&mut self.input);
        self.store.add_todo(&name);
        true
    }

    /// Selects a tab
    pub const fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Currently selected tab
    #[must_use]
    pub const fn tab(&self) -> Tab {
        self.tab
    }

    /// Toggles the completion flag of a todo
    pub fn toggle(&self, id: TodoId) {
        self.store.check_todo(id);
    }

    /// Removes every completed todo
    pub fn clear_completed(&self) {
        self.store.clear_completed_todos();
    }

    /// Derives what to render from the current list
    #[must_use]
    pub fn view(&self) -> TodoView {
        TodoView::derive(&self.store.todo_list(), self.tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockTodoStore, TodoCall};
    use crate::types::TodoItem;

    fn item(id: u64, name: &str, checked: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            name: name.to_string(),
            checked,
        }
    }

    #[test]
    fn starts_on_all_tab_with_empty_input() {
        let page = TodoPage::new(MockTodoStore::new());

        assert_eq!(page.tab(), Tab::All);
        assert_eq!(page.input(), "");
        assert!(!page.can_submit());
    }

    #[test]
    fn submit_adds_and_clears_input() {
        let mut page = TodoPage::new(MockTodoStore::new());

        page.set_input("New todo");
        assert!(page.can_submit());
        assert!(page.submit());

        assert_eq!(page.input(), "");
        assert_eq!(
            page.store().calls(),
            vec![TodoCall::AddTodo("New todo".to_string())]
        );
        assert_eq!(page.view().visible, vec![item(0, "New todo", false)]);
    }

    #[test]
    fn blank_input_is_not_submitted() {
        let mut page = TodoPage::new(MockTodoStore::new());

        page.set_input("   ");

        assert!(!page.submit());
        assert_eq!(page.input(), "   ");
        assert!(page.store().calls().is_empty());
    }

    #[test]
    fn toggle_forwards_id() {
        let page = TodoPage::new(MockTodoStore::with_todos(vec![item(0, "A", false)]));

        page.toggle(TodoId::new(0));

        assert_eq!(page.store().calls(), vec![TodoCall::CheckTodo(TodoId::new(0))]);
        assert_eq!(page.view().visible, vec![item(0, "A", true)]);
    }

    #[test]
    fn clear_completed_forwards() {
        let page = TodoPage::new(MockTodoStore::with_todos(vec![
            item(0, "A", true),
            item(1, "B", false),
        ]));

        page.clear_completed();

        assert_eq!(page.store().calls(), vec![TodoCall::ClearCompletedTodos]);
        assert_eq!(page.view().visible, vec![item(1, "B", false)]);
    }

    #[test]
    fn selected_tab_filters_view() {
        let mut page = TodoPage::new(MockTodoStore::with_todos(vec![
            item(0, "A", false),
            item(1, "B", true),
            item(2, "C", false),
        ]));

        page.select_tab(Tab::Completed);
        let view = page.view();

        assert_eq!(view.tab, Tab::Completed);
        assert_eq!(view.visible, vec![item(1, "B", true)]);
        assert_eq!(view.items_left, "2 items left");
    }
}
