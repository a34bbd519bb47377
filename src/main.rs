use std::env;
use std::fs;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: tabnote <input.tab> [output.json]");
        eprintln!("       tabnote --yaml <input.tab> [output.yaml]");
        eprintln!("       tabnote --notes <input.tab> [output.json]");
        process::exit(1);
    }

    let mut yaml = false;
    let mut notes_only = false;
    let mut input_path = &args[1];
    let mut output_path: Option<&String> = args.get(2);

    // Parse flags
    if args[1] == "--yaml" || args[1] == "--notes" {
        yaml = args[1] == "--yaml";
        notes_only = args[1] == "--notes";
        if args.len() < 3 {
            eprintln!("Usage: tabnote {} <input.tab> [output]", args[1]);
            process::exit(1);
        }
        input_path = &args[2];
        output_path = args.get(3);
    }

    // Read input file
    let tab_text = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Parse and encode
    let result = if notes_only {
        tabnote::notes_to_json(&tabnote::parse(&tab_text))
    } else if yaml {
        tabnote::to_yaml(&tabnote::summarize(&tab_text))
    } else {
        tabnote::to_json(&tabnote::summarize(&tab_text))
    };

    let rendered = match result {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Encoding error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote parsed tab to {}", path);
        }
        None => {
            println!("{}", rendered);
        }
    }
}
