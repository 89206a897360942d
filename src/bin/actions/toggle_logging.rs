use std::io;

pub fn toggle_logging() -> io::Result<()> {
    let on = premium_dock::log::toggle_logging();
    if on {
        println!(
            "Logging enabled.\n\
             On Windows, view the output with Sysinternals DebugView:\n\
             https://learn.microsoft.com/en-us/sysinternals/downloads/debugview"
        );
    } else {
        println!("Logging disabled.");
    }
    Ok(())
}
