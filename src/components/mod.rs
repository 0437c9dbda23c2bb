//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod filter_select;
mod todo_form;
mod todo_list;
mod todo_row;

pub use alert::Alert;
pub use filter_select::FilterSelect;
pub use todo_form::TodoForm;
pub use todo_list::TodoListView;
pub use todo_row::TodoRow;
