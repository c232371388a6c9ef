//! Command parser for the : command system

use super::Section;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Open(Section),
    /// Raw identifier, resolved by the router with its dashboard fallback
    Goto(String),

    // Shell commands
    Menu,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Open(Section::Dashboard),
        "appointments" | "appointment" | "appt" | "appts" => Command::Open(Section::Appointments),
        "exercise" | "ex" | "workout" => Command::Open(Section::Exercise),
        "vitals" | "vital" => Command::Open(Section::Vitals),
        "messages" | "message" | "msg" | "inbox" => Command::Open(Section::Messages),
        "profile" => Command::Open(Section::Profile),
        "goto" | "go" => {
            if let Some(id) = args {
                Command::Goto(id)
            } else {
                Command::Unknown(input.to_string())
            }
        }

        // Shell
        "menu" | "collapse" | "nav" => Command::Menu,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("dash"), Command::Open(Section::Dashboard));
        assert_eq!(parse_command("appt"), Command::Open(Section::Appointments));
        assert_eq!(parse_command("  vitals  "), Command::Open(Section::Vitals));
        assert_eq!(parse_command("MSG"), Command::Open(Section::Messages));
        assert_eq!(
            parse_command("goto exercise"),
            Command::Goto("exercise".to_string())
        );
    }

    #[test]
    fn test_parse_goto_without_target() {
        assert_eq!(parse_command("goto"), Command::Unknown("goto".to_string()));
        assert_eq!(parse_command("goto   "), Command::Unknown("goto".to_string()));
    }

    #[test]
    fn test_parse_shell_commands() {
        assert_eq!(parse_command("menu"), Command::Menu);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("billing"),
            Command::Unknown("billing".to_string())
        );
    }
}
