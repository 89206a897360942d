pub mod add_items;
pub mod dialog;
pub mod launch_item;
pub mod list_items;
pub mod show_placement;
pub mod toggle_logging;
