// text-spell: check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word is
// accepted by the dictionary. Output format:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   text-spell -d BASE [OPTIONS]
//
// Options:
//   -d, --dict BASE     Dictionary base path (reads BASE.aff and BASE.dic);
//                       defaults to $TEXTBRIDGE_DICT
//   -a, --add-dic PATH  Merge an auxiliary .dic file before checking
//   --key KEY           Decryption key for encrypted dictionaries
//   -s, --suggest       Also print suggestions for misspelled words
//   -h, --help          Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_base, args) = textbridge_cli::parse_value_flag(&args, "--dict", "-d");
    let (extra_dic, args) = textbridge_cli::parse_value_flag(&args, "--add-dic", "-a");
    let (key, args) = textbridge_cli::parse_value_flag(&args, "--key", "--key");

    if textbridge_cli::wants_help(&args) {
        println!("text-spell: check spelling of words from stdin.");
        println!();
        println!("Usage: text-spell -d BASE [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict BASE     Dictionary base path (BASE.aff + BASE.dic);");
        println!("                      defaults to $TEXTBRIDGE_DICT");
        println!("  -a, --add-dic PATH  Merge an auxiliary .dic file before checking");
        println!("  --key KEY           Decryption key for encrypted dictionaries");
        println!("  -s, --suggest       Also print suggestions for misspelled words");
        println!("  -h, --help          Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let mut handle = textbridge_cli::open_handle(dict_base.as_deref(), key.as_deref())
        .unwrap_or_else(|e| textbridge_cli::fatal(&e));

    if let Some(extra) = extra_dic {
        handle
            .add_dic(&extra, key.as_deref())
            .unwrap_or_else(|e| textbridge_cli::fatal(&e.to_string()));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        if handle.spell(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in handle.suggest(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
