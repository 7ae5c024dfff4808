/// AX3D Terminal Demo - Rotating wireframe figures
///
/// Usage: ax3d-terminal [FIGURE] [PROJECTION]
///   FIGURE:     diamond (default) | cube
///   PROJECTION: isometric (default) | engineer | cavalier | birdseye | military
use std::env;
use std::io;
use std::process;

use ax3d_core::{Axonometry, Figure};
use ax3d_terminal::TerminalApp;

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [FIGURE] [PROJECTION]", program);
    eprintln!("  FIGURE:     diamond (default) | cube");
    eprintln!("  PROJECTION: isometric (default) | engineer | cavalier | birdseye | military");
    process::exit(2);
}

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let basis = match args.get(2).map(String::as_str) {
        None | Some("isometric") => Axonometry::isometric(),
        Some("engineer") => Axonometry::engineer(),
        Some("cavalier") => Axonometry::cavalier(225f64.to_radians(), 1.0),
        Some("birdseye") => Axonometry::birds_eye(210f64.to_radians(), 1.0, 1.0),
        Some("military") => Axonometry::military(210f64.to_radians(), 1.0, 1.0),
        Some(_) => usage(&args[0]),
    };

    let figure = match args.get(1).map(String::as_str) {
        None | Some("diamond") => Figure::diamond(12, basis),
        Some("cube") => Figure::cube(20.0, basis),
        Some(_) => usage(&args[0]),
    };

    println!("AX3D - starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(figure, basis)?;
    app.run()
}
