use crate::utils::message_box::show_error;
use premium_dock::{DockItem, DockView, FRIENDLY_NAME, LaunchError};

/// Prints the item row after every change.
pub struct ConsoleView;

impl DockView for ConsoleView {
    fn items_changed(&mut self, items: &[DockItem]) {
        let names: Vec<&str> = items.iter().map(|i| i.display_name.as_str()).collect();
        if names.is_empty() {
            println!("[dock is empty - add items to get started]");
        } else {
            println!("[ {} ]", names.join(" | "));
        }
    }

    fn launch_failed(&mut self, error: &LaunchError) {
        show_error(FRIENDLY_NAME, &error.to_string());
    }
}
