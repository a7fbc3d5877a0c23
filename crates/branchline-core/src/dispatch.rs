//! Discrete matchers: exact and guarded `match` over enumerable inputs,
//! with an explicit fallback arm guaranteeing totality.

/// Describe a handful of well-known HTTP status codes.
pub fn handle_http_status(status_code: u16) -> String {
    match status_code {
        200 => "OK - Request successful".to_string(),
        404 => "Not Found".to_string(),
        500 => "Internal Server Error".to_string(),
        _ => format!("Unknown status code: {status_code}"),
    }
}

/// Dispatch a console command: case-insensitive keyword, aliases sharing an
/// arm, and the save/load arms conditioned on the argument count.
///
/// `load` with no arguments has no dedicated arm and reports an unknown
/// command; only `save` asks for the missing filename.
pub fn process_command(command: &str, args: &[&str]) -> String {
    match command.to_lowercase().as_str() {
        "help" | "h" => "Available commands: help, quit, save, load".to_string(),
        "quit" | "exit" | "q" => "Goodbye!".to_string(),
        "save" if !args.is_empty() => format!("Saving to {}", args[0]),
        "save" => "Please specify filename".to_string(),
        "load" if !args.is_empty() => format!("Loading from {}", args[0]),
        // The fallback echoes the caller's casing, not the lowercased keyword.
        _ => format!("Unknown command: {command}"),
    }
}
