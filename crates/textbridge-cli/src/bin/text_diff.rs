// text-diff: print the edit script between two files.
//
// Computes the semantically cleaned edit script and prints one line per
// operation, prefixed with its kind:
//   - deleted text
//   + inserted text
//   = unchanged text
// Texts are printed with escapes so multi-line spans stay one line each.
//
// Usage:
//   text-diff [--flat] FILE1 FILE2
//
// Options:
//   --flat      Print the flat host encoding (alternating kind and text)
//   -h, --help  Print help

use textbridge_diff::{EditKind, FlatField};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if textbridge_cli::wants_help(&args) {
        println!("text-diff: print the edit script between two files.");
        println!();
        println!("Usage: text-diff [--flat] FILE1 FILE2");
        println!();
        println!("Options:");
        println!("  --flat      Print the flat host encoding (kind, text alternating)");
        println!("  -h, --help  Print this help");
        return;
    }

    let flat = args.iter().any(|a| a == "--flat");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if files.len() != 2 {
        textbridge_cli::fatal("expected exactly two file arguments");
    }

    let text1 = std::fs::read_to_string(files[0])
        .unwrap_or_else(|e| textbridge_cli::fatal(&format!("{}: {e}", files[0])));
    let text2 = std::fs::read_to_string(files[1])
        .unwrap_or_else(|e| textbridge_cli::fatal(&format!("{}: {e}", files[1])));

    let edits = textbridge_diff::diff(&text1, &text2);

    if flat {
        for field in textbridge_diff::flatten(&edits) {
            match field {
                FlatField::Kind(code) => println!("{code}"),
                FlatField::Text(text) => println!("{}", text.escape_default()),
            }
        }
        return;
    }

    for edit in &edits {
        let sign = match edit.kind {
            EditKind::Delete => '-',
            EditKind::Insert => '+',
            EditKind::Equal => '=',
        };
        println!("{sign} {}", edit.text.escape_default());
    }
}
