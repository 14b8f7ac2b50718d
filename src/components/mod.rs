//! UI Components
//!
//! Reusable Leptos components.

mod delete_list_button;
mod footer;
mod item_row;
mod new_item_form;
mod new_list_form;
mod notice_stack;
mod shopping_list_card;

pub use delete_list_button::DeleteListButton;
pub use footer::Footer;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use new_list_form::NewListForm;
pub use notice_stack::NoticeStack;
pub use shopping_list_card::ShoppingListCard;
