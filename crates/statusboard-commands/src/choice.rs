//! Status argument offered as a fixed slash command choice.

use statusboard_board::Status;

/// The five statuses an admin can pick, shown by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum StatusChoice {
    /// Not detected.
    #[name = "Undetected"]
    Undetected,
    /// Being updated.
    #[name = "Updating"]
    Updating,
    /// Use at own risk.
    #[name = "High Risk"]
    HighRisk,
    /// Under test.
    #[name = "Testing"]
    Testing,
    /// Detected.
    #[name = "Detected"]
    Detected,
}

impl From<StatusChoice> for Status {
    fn from(choice: StatusChoice) -> Self {
        match choice {
            StatusChoice::Undetected => Self::Undetected,
            StatusChoice::Updating => Self::Updating,
            StatusChoice::HighRisk => Self::HighRisk,
            StatusChoice::Testing => Self::Testing,
            StatusChoice::Detected => Self::Detected,
        }
    }
}
