//! In-memory todo collection.
//!
//! # Design
//! Todos are kept in insertion order in a plain `Vec`. Every lookup is a
//! linear scan. Ids are not unique, so the two id-based operations differ on
//! duplicates: [`TodoStore::replace`] overwrites only the first match while
//! [`TodoStore::delete`] drops every match.

use crate::model::Todo;

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Appends `todo` without checking whether its id is already taken.
    pub fn create(&mut self, todo: Todo) -> &Todo {
        self.todos.push(todo);
        &self.todos[self.todos.len() - 1]
    }

    /// Overwrites the first todo whose id is `id` with `todo`.
    ///
    /// `todo.id` may differ from `id`; the stored entry takes whatever was
    /// supplied. Returns `None` when no todo has that id.
    pub fn replace(&mut self, id: i64, todo: Todo) -> Option<&Todo> {
        let slot = self.todos.iter_mut().find(|t| t.id == id)?;
        *slot = todo;
        Some(&*slot)
    }

    /// Removes every todo whose id is `id` and returns how many were dropped.
    pub fn delete(&mut self, id: i64) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        before - self.todos.len()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
