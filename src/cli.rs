use clap::Parser;
use std::path::PathBuf;

/// Value `--user` takes when passed without a name; it never matches a persona
pub const USER_NOT_GIVEN: &str = "arg_was_not_given";

const ABOUT: &str = "Copies user personas to clipboard. Default behavior is to copy all data found. \
Provide the application an xlsx file with a 'personas' sheet. Column 0 must contain the \
usernames and column 1 the passwords";

#[derive(Parser, Debug)]
#[command(name = "pwdsaver", version)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    /// Input file. Only accepts .xlsx files for now.
    #[arg(value_parser = parse_xlsx_path)]
    pub file: PathBuf,

    /// Get a specific user persona
    #[arg(long, num_args = 0..=1, default_missing_value = USER_NOT_GIVEN)]
    pub user: Option<String>,

    /// Sheet to read personas from (overrides config)
    #[arg(long, value_name = "NAME")]
    pub sheet: Option<String>,

    /// Pause after each clipboard write, in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

impl Cli {
    /// The user filter, if one applies. An empty name means copy everything.
    pub fn user_filter(&self) -> Option<&str> {
        self.user.as_deref().filter(|user| !user.is_empty())
    }
}

fn parse_xlsx_path(value: &str) -> Result<PathBuf, String> {
    if value.ends_with(".xlsx") {
        Ok(PathBuf::from(value))
    } else {
        Err(format!("Please enter a valid .xlsx file. Got: {}", value))
    }
}
