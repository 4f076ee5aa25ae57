// Interactive REPL using editline

use editline::{LineEditor, terminals::StdioTerminal};
use rpn_core::{Base, Interpreter, format_value};
use std::io::Write;
use tracing::info;

const HELP_HINT: &str = "Type `help <word>` for details on a word";

pub fn run_repl(base: Base, banner: bool) -> Result<(), Box<dyn std::error::Error>> {
    if banner {
        print_banner();
    }

    let mut interp = Interpreter::with_base(base);
    info!(base = base.radix(), "repl started");

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("\n{}> ", prompt_prefix(&interp));
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match meta_command(trimmed, &interp) {
                    Some(MetaCommand::Quit) => {
                        println!("Goodbye!");
                        break;
                    }
                    Some(MetaCommand::Handled) => continue,
                    None => {}
                }

                match interp.execute(trimmed) {
                    Ok(display) => println!("{}", display),
                    Err(e) => eprintln!("Error: {}", e),
                }
                print_stack(&interp);
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

fn print_banner() {
    println!();
    println!(" ____  ____  _   _ ");
    println!("|  _ \\|  _ \\| \\ | |");
    println!("| |_) | |_) |  \\| |");
    println!("|  _ <|  __/| |\\  |");
    println!("|_| \\_\\_|   |_| \\_| v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Type numbers, then `enter` or an operator: 5 enter 3 /");
    println!("Type `'42` for the constant 42, `hex`/`dec`/`oct`/`bin` to switch base");
    println!("Type `words` to see every word, `stack` to see the stack");
    println!("{}", HELP_HINT);
    println!("Type `quit` or press Ctrl-D to exit");
    println!();
}

// The status indicator shows the base only when it is not 10, and lists
// the letter keys when they are live
fn prompt_prefix(interp: &Interpreter) -> String {
    let Some(indicator) = interp.engine.mode_indicator() else {
        return String::new();
    };
    if interp.engine.base().accepts_hex_letters() {
        format!("[{} A-F] ", indicator)
    } else {
        format!("[{}] ", indicator)
    }
}

enum MetaCommand {
    Quit,
    Handled,
}

// Words the REPL answers itself rather than passing to the engine
fn meta_command(line: &str, interp: &Interpreter) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    match first {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "stack" => {
            print_stack(interp);
            Some(MetaCommand::Handled)
        }
        "words" => {
            print_words(interp);
            Some(MetaCommand::Handled)
        }
        "help" => {
            match parts.next() {
                Some(word) => print_help(interp, word.trim_start_matches('\'')),
                None => println!("{}", HELP_HINT),
            }
            Some(MetaCommand::Handled)
        }
        _ => None,
    }
}

fn print_stack(interp: &Interpreter) {
    let engine = &interp.engine;
    let base = engine.base();
    let mut line = String::from("Stack:");
    if engine.stack().is_empty() {
        line.push_str(" (empty)");
    }
    for value in engine.stack() {
        line.push(' ');
        line.push_str(&format_value(*value, base));
    }
    if let Some(buffer) = engine.input_buffer() {
        line.push_str(&format!("  | typing: {}", buffer.to_uppercase()));
    }
    println!("{}", line);
}

fn print_words(interp: &Interpreter) {
    let words = interp.dictionary.words();
    println!("Defined words ({}):", words.len());

    let max_len = words.iter().map(|w| w.len()).max().unwrap_or(0);
    let col_width = max_len + 3;

    // Display words in columns of 5
    for chunk in words.chunks(5) {
        let mut line = String::new();
        for word in chunk {
            line.push_str(&format!("{:width$} ", word, width = col_width));
        }
        println!("{}", line.trim_end());
    }
}

fn print_help(interp: &Interpreter, word: &str) {
    match interp.dictionary.lookup(word) {
        Some(entry) => {
            println!("{}:", word);
            for line in entry.doc.split('\n') {
                println!("  {}", line);
            }
        }
        None => eprintln!("Error: no such word: {}", word),
    }
}
