//! Failure classification and user-facing reporting.
//!
//! Only a few statuses carry guidance. Success and unrecognised codes are
//! passed through silently; the exit status is the launch status either way.

mod browser;
mod console;

pub use browser::SystemBrowser;
pub use console::ConsoleReporter;

use crate::config::ReportConfig;
use crate::runtime::LaunchStatus;

/// User-facing classification of a failed launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// No usable runtime: not found, failed to initialize, or failed to load.
    RuntimeMissing,
    /// The runtime could not parse the argument vector.
    BadArguments,
    /// The runtime started but the application did not.
    StartFailure,
}

impl FailureCategory {
    /// Category for `status`, or `None` when no guidance applies.
    pub fn classify(status: LaunchStatus) -> Option<Self> {
        match status {
            LaunchStatus::RUNTIME_NOT_FOUND
            | LaunchStatus::RUNTIME_INIT_FAILED
            | LaunchStatus::RUNTIME_LOAD_FAILED => Some(Self::RuntimeMissing),
            LaunchStatus::ARGUMENT_PARSE_FAILED => Some(Self::BadArguments),
            LaunchStatus::PROGRAM_START_FAILED => Some(Self::StartFailure),
            _ => None,
        }
    }
}

/// Answer to an OK/Cancel prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    Accept,
    Cancel,
}

/// A modal message: title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

/// Presents dialogs to the user. Calls block until dismissed.
pub trait Reporter {
    /// Explain that a runtime is required and ask whether to fetch one.
    fn report_runtime_missing(&mut self, dialog: &Dialog) -> UserChoice;

    /// Show an informational message.
    fn report_message(&mut self, dialog: &Dialog);
}

/// Opens URLs outside the process.
pub trait Browser {
    fn open_url(&mut self, url: &str) -> std::io::Result<()>;
}

/// Fixed dialog texts, parameterised by product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    product_name: String,
    download_url: String,
}

impl Messages {
    pub fn new(product_name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            download_url: download_url.into(),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(&config.product_name, &config.download_url)
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn dialog(&self, category: FailureCategory) -> Dialog {
        let product = &self.product_name;
        let body = match category {
            // The download URL is only used by the browser action.
            FailureCategory::RuntimeMissing => format!(
                "{product} needs the Java Runtime Environment 6.0 or above. \
                 Click OK to go to www.java.com, where you can install Java."
            ),
            FailureCategory::BadArguments => format!(
                "{product} failed to parse the commandline arguments to Java.\n\
                 Please download and install {product} again."
            ),
            FailureCategory::StartFailure => format!(
                "{product} was unable to load.\n\
                 Please download and install {product} again."
            ),
        };
        Dialog {
            title: format!("{product} Launcher Error"),
            body,
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// Show at most one dialog for `status`.
///
/// Returns the category that was reported, if any.
pub fn report_failure(
    status: LaunchStatus,
    messages: &Messages,
    reporter: &mut dyn Reporter,
    browser: &mut dyn Browser,
) -> Option<FailureCategory> {
    let Some(category) = FailureCategory::classify(status) else {
        if !status.is_success() {
            tracing::info!(%status, "Runtime exited with unclassified status");
        }
        return None;
    };

    tracing::warn!(%status, ?category, "Launch failed");
    let dialog = messages.dialog(category);
    match category {
        FailureCategory::RuntimeMissing => {
            if reporter.report_runtime_missing(&dialog) == UserChoice::Accept {
                if let Err(e) = browser.open_url(messages.download_url()) {
                    tracing::warn!(url = messages.download_url(), "Failed to open browser: {e}");
                }
            }
        }
        FailureCategory::BadArguments | FailureCategory::StartFailure => {
            reporter.report_message(&dialog);
        }
    }
    Some(category)
}
