pub mod replay;
pub mod todo_list;
