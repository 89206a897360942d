use crate::actions::dialog::theme;
use crate::utils::console_view::ConsoleView;
use dialoguer::Input;
use dialoguer::console::style;
use premium_dock::Dock;
use premium_dock::drop_target::{DropEffect, DropPayload};
use premium_dock::log::log;
use std::io;

/// Console stand-in for the drop surface: dragging files onto a terminal pastes their paths.
pub fn add_items(dock: &mut Dock, view: &mut ConsoleView) -> io::Result<()> {
    let text: String = Input::with_theme(&theme())
        .with_prompt("Drop files, folders or shortcuts here")
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)?;

    let payload = DropPayload::from_pasted_text(&text);
    if dock.drag_enter(&payload) == DropEffect::None {
        log(format!("Add items: rejected payload {:?}", text));
        println!("{}", style("Not accepted: only absolute file and folder paths can be dropped.").yellow());
        return Ok(());
    }

    let dropped = payload.paths().map(<[_]>::len).unwrap_or(0);
    let added = dock.handle_drop(&payload, view);
    println!("Added {} of {} dropped item(s).", added, dropped);
    Ok(())
}
