use erdsketch::render_schema;
use erdsketch::schema::Schema;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut output_path: Option<String> = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-s" | "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid seed: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "-h" | "--help" => {
                eprintln!("Usage: {} [options]", args[0]);
                eprintln!();
                eprintln!("Renders the embedded schema sketch as an SVG diagram.");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o, --output <file>   Output file (default: stdout)");
                eprintln!("  -s, --seed <n>        Layout seed (default: 42)");
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let svg = match render_schema(&Schema::example(), seed) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Diagram error: {}", e);
            process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &svg) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => print!("{}", svg),
    }
}
