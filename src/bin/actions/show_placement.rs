use premium_dock::Dock;
use premium_dock::display::primary_work_area;
use std::io;

pub fn show_placement(dock: &Dock) -> io::Result<()> {
    match primary_work_area() {
        Some(area) => {
            let p = dock.placement(&area);
            println!("Work area: {}x{} at ({}, {})", area.width, area.height, area.left, area.top);
            println!("Dock: {}x{} at ({}, {})", p.width, p.height, p.x, p.y);
        }
        None => println!("The work area cannot be queried on this platform."),
    }
    Ok(())
}
