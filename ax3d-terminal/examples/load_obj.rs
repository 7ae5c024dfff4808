/// Example: Load and animate a wireframe OBJ file in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/file.obj
use std::env;
use std::fs;
use std::io;

use ax3d_core::{obj, Axonometry, Figure};
use ax3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let basis = Axonometry::isometric();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using default cube...");
        let cube = Figure::cube(20.0, basis);
        let mut app = TerminalApp::new(cube, basis)?;
        return app.run();
    }

    let obj_path = &args[1];

    println!("Loading OBJ file: {}", obj_path);

    let source = fs::read_to_string(obj_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read OBJ file: {}", e),
        )
    })?;

    let figure = obj::parse_obj(&source, basis).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse OBJ: {}", e),
        )
    })?;

    println!(
        "Loaded {} vertices, {} edges",
        figure.points.len(),
        figure.edges.len()
    );
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(figure, basis)?;
    app.run()
}
