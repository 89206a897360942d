use crate::actions::add_items::add_items;
use crate::actions::launch_item::launch_item;
use crate::actions::list_items::list_items;
use crate::actions::show_placement::show_placement;
use crate::actions::toggle_logging::toggle_logging;
use crate::utils::console_view::ConsoleView;
use dialoguer::Select;
use dialoguer::console::{Term, style};
use dialoguer::theme::ColorfulTheme;
use premium_dock::log::log_enabled;
use premium_dock::{Dock, FRIENDLY_NAME};
use std::io;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    AddItems,
    LaunchItem,
    ListItems,
    ShowPlacement,
    ToggleLogging,
    Exit,
}

pub fn theme() -> ColorfulTheme {
    // ASCII prefixes render in every console font.
    let mut t = ColorfulTheme::default();
    t.active_item_prefix = style(">".to_string());
    t.inactive_item_prefix = style(" ".to_string());
    t.picked_item_prefix = style(">".to_string());
    t.unpicked_item_prefix = style(" ".to_string());
    t.prompt_prefix = style("$".to_string());
    t.success_prefix = style(">".to_string());
    t.error_prefix = style("!".to_string());
    t
}

pub fn action_choose(dock: &Dock) -> io::Result<(Action, String)> {
    let mut actions = vec![Action::AddItems];
    let mut labels: Vec<String> = vec!["Add items (drop paths)".into()];

    if !dock.items().is_empty() {
        actions.push(Action::LaunchItem);
        labels.push("Launch item".into());
    }

    actions.extend([Action::ListItems, Action::ShowPlacement]);
    labels.push(format!("List items ({})", dock.items().len()));
    labels.push("Show placement".into());

    actions.push(Action::ToggleLogging);
    labels.push(if log_enabled() { "Disable log" } else { "Enable log" }.into());

    actions.push(Action::Exit);
    labels.push("Exit".into());

    let idx = Select::with_theme(&theme())
        .with_prompt(FRIENDLY_NAME)
        .items(&labels)
        .default(0)
        .interact_on(&Term::stdout())
        .map_err(io::Error::other)?;

    Ok((actions[idx], labels[idx].clone()))
}

pub fn action_execute(action: Action, dock: &mut Dock, view: &mut ConsoleView) -> io::Result<()> {
    match action {
        Action::AddItems => add_items(dock, view),
        Action::LaunchItem => launch_item(dock, view),
        Action::ListItems => list_items(dock),
        Action::ShowPlacement => show_placement(dock),
        Action::ToggleLogging => toggle_logging(),
        Action::Exit => Ok(()),
    }
}
