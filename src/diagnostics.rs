use colored::Colorize;
use is_terminal::IsTerminal;

const NO_JSON: &str = "No json generated";
const APP_ID_LABEL: &str = "appId:";

/// Renders the human-readable lines written to the error stream.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostics {
    colorize: bool,
}

impl Diagnostics {
    #[must_use]
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    /// Decorates only when stderr is attached to a terminal, so captured
    /// stderr always carries the plain text.
    #[must_use]
    pub fn for_stderr() -> Self {
        Self::new(std::io::stderr().is_terminal())
    }

    pub fn no_json(&self) -> String {
        if self.colorize {
            NO_JSON.yellow().to_string()
        } else {
            NO_JSON.to_string()
        }
    }

    pub fn app_id(&self, id: &str) -> String {
        let label = if self.colorize {
            APP_ID_LABEL.bold().to_string()
        } else {
            APP_ID_LABEL.to_string()
        };
        format!("{label}  {id}")
    }
}
