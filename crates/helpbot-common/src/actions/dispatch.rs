use super::Action;

impl Action {
    /// Human-readable label for help output and failure notices.
    pub fn label(&self) -> &'static str {
        match self {
            Action::NewChat => "New Chat",
            Action::Escalate => "Escalate",
            Action::SendMessage(_) => "Send Message",
            Action::ShowHistory => "Show History",
            Action::SubmitFeedback { .. } => "Send Feedback",
            Action::Help => "Help",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// REPL syntax for the action, shown by `/help`.
    pub fn usage(&self) -> &'static str {
        match self {
            Action::NewChat => "/new",
            Action::Escalate => "/escalate",
            Action::SendMessage(_) => "<text>",
            Action::ShowHistory => "/history",
            Action::SubmitFeedback { .. } => "/feedback [1-5] [comment]",
            Action::Help => "/help",
            Action::Quit => "/quit",
            Action::None => "",
        }
    }

    /// All actions reachable from the REPL.
    pub fn repl_actions() -> Vec<Action> {
        vec![
            Action::SendMessage(String::new()),
            Action::NewChat,
            Action::Escalate,
            Action::ShowHistory,
            Action::SubmitFeedback {
                rating: None,
                comments: String::new(),
            },
            Action::Help,
            Action::Quit,
        ]
    }

    /// Resolve one line of REPL input.
    ///
    /// Anything not starting with `/` is a message and is passed through
    /// untouched, blank lines included. A leading `//` sends the rest of the
    /// line as a message starting with a single `/`.
    pub fn from_input(line: &str) -> Action {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            return Action::SendMessage(line.replacen('/', "", 1));
        }
        let Some(command) = trimmed.strip_prefix('/') else {
            return Action::SendMessage(line.to_string());
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "new" => Action::NewChat,
            "escalate" => Action::Escalate,
            "history" => Action::ShowHistory,
            "feedback" => parse_feedback(rest),
            "help" | "?" => Action::Help,
            "quit" | "exit" => Action::Quit,
            _ => Action::None,
        }
    }
}

fn parse_feedback(rest: &str) -> Action {
    let (first, tail) = match rest.split_once(char::is_whitespace) {
        Some((first, tail)) => (first, tail.trim()),
        None => (rest, ""),
    };

    match first.parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => Action::SubmitFeedback {
            rating: Some(rating),
            comments: tail.to_string(),
        },
        _ => Action::SubmitFeedback {
            rating: None,
            comments: rest.to_string(),
        },
    }
}
