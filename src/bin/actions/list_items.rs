use premium_dock::Dock;
use std::io;

pub fn list_items(dock: &Dock) -> io::Result<()> {
    if dock.items().is_empty() {
        println!("The dock is empty.");
    }
    for (i, item) in dock.items().iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.display_name);
        println!("     source : {}", item.source_path.display());
        if item.launch_path != item.source_path {
            println!("     target : {}", item.launch_path.display());
        }
        println!("     start in: {}", item.working_directory.display());
    }
    println!("Record: {}", dock.storage().path().display());
    Ok(())
}
