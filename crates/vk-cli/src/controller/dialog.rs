use vk_core::{Item, ItemForm};

/// User interaction points of the controller.
pub trait Dialogs {
    /// Show the edit form pre-filled from `current`. `None` cancels.
    fn edit_item(&mut self, current: &Item) -> Option<ItemForm>;

    /// Ask whether `item` should be deleted.
    fn confirm_delete(&mut self, item: &Item) -> bool;
}
