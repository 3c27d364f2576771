// textbridge-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;

use textbridge_spell::SpellHandle;

/// Environment variable naming the default dictionary base path
/// (expanded to `BASE.aff` / `BASE.dic`).
const DICT_ENV: &str = "TEXTBRIDGE_DICT";

/// Open a spell handle from a dictionary base path.
///
/// `base` names the pair without extension: `en_US` reads `en_US.aff` and
/// `en_US.dic`, the convention Hunspell dictionaries are distributed in.
/// Falls back to the `TEXTBRIDGE_DICT` environment variable when no base
/// is given.
pub fn open_handle(base: Option<&str>, key: Option<&str>) -> Result<SpellHandle, String> {
    let base = match base {
        Some(b) => PathBuf::from(b),
        None => match std::env::var(DICT_ENV) {
            Ok(b) => PathBuf::from(b),
            Err(_) => {
                return Err(format!(
                    "no dictionary given: pass -d BASE or set {DICT_ENV}"
                ));
            }
        },
    };

    let aff = base.with_extension("aff");
    let dic = base.with_extension("dic");
    SpellHandle::open(&aff, &dic, key).map_err(|e| e.to_string())
}

/// Extract a `--long=VALUE`, `--long VALUE`, or `-s VALUE` argument.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
