use nu_ansi_term::Color;

/// Prints tagged status lines (`[INFO] ...`) on stderr.
#[derive(Debug, Clone, Copy)]
pub struct Status {
    use_color: bool,
}

impl Status {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn info(&self, message: &str) {
        eprintln!("{}", self.line("INFO", Color::Green, message));
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.line("ERROR", Color::Red, message));
    }

    fn line(&self, tag: &str, color: Color, message: &str) -> String {
        let tag = format!("[{tag}]");
        if self.use_color {
            format!("{} {}", color.bold().paint(tag), message)
        } else {
            format!("{} {}", tag, message)
        }
    }
}
