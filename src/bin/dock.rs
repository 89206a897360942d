use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use premium_dock::display::{self, DisplayWatcher, WorkArea, primary_work_area};
use premium_dock::log::log;
use premium_dock::{Dock, FRIENDLY_NAME};

use crate::actions::dialog::{Action, action_choose, action_execute};
use crate::utils::console_view::ConsoleView;

#[path = "actions/mod.rs"]
mod actions;

#[path = "utils/mod.rs"]
mod utils;

fn main() -> io::Result<()> {
    log("Dock started");
    let mut view = ConsoleView;
    let mut dock = Dock::open_default(&mut view).map_err(|err| {
        log(format!("Dock: cannot open storage: {}", err));
        io::Error::other(err)
    })?;

    // Work-area changes arrive through the process-wide subscription and are
    // applied between menu rounds.
    let pending: Arc<Mutex<Option<WorkArea>>> = Arc::new(Mutex::new(None));
    let subscription = {
        let pending = pending.clone();
        display::subscribe(move |area| {
            *pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(*area);
        })
    };
    let mut watcher = DisplayWatcher::new();
    if let Some(area) = primary_work_area() {
        watcher.poll(area);
        report_placement(&dock, &area);
    }

    loop {
        if let Some(area) = primary_work_area() {
            watcher.poll(area);
        }
        if let Some(area) = pending.lock().unwrap_or_else(PoisonError::into_inner).take() {
            report_placement(&dock, &area);
        }

        let (action, label) = action_choose(&dock)?;
        log(format!("Menu selection: {}", label));

        if action == Action::Exit {
            log("Dock exiting");
            break;
        }

        if let Err(err) = action_execute(action, &mut dock, &mut view) {
            log(format!("Action '{}' failed: {}", label, err));
            return Err(err);
        }

        pause("\nPress Enter to return to the menu...");
    }

    drop(subscription);
    Ok(())
}

fn report_placement(dock: &Dock, area: &WorkArea) {
    let p = dock.placement(area);
    println!("{} window: {}x{} at ({}, {})", FRIENDLY_NAME, p.width, p.height, p.x, p.y);
}

fn pause(msg: &str) {
    print!("{msg}");
    let _ = io::stdout().flush();
    let mut _buf = String::new();
    let _ = io::stdin().read_line(&mut _buf);
}
