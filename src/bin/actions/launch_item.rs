use crate::actions::dialog::theme;
use crate::utils::console_view::ConsoleView;
use dialoguer::Select;
use dialoguer::console::Term;
use premium_dock::Dock;
use premium_dock::log::log;
use std::io;

pub fn launch_item(dock: &Dock, view: &mut ConsoleView) -> io::Result<()> {
    let mut labels: Vec<String> = dock
        .items()
        .iter()
        .map(|item| format!("{}  ({})", item.display_name, item.launch_path.display()))
        .collect();
    labels.push("Cancel".into());

    let idx = Select::with_theme(&theme())
        .with_prompt("Launch")
        .items(&labels)
        .default(0)
        .interact_on(&Term::stdout())
        .map_err(io::Error::other)?;

    if idx >= dock.items().len() {
        return Ok(());
    }

    // Failures were already shown by the view; the menu keeps running.
    if let Err(err) = dock.launch(idx, view) {
        log(format!("Launch item: {}", err));
    }
    Ok(())
}
