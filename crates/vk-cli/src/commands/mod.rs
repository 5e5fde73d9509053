pub mod add;
pub mod create_db;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod local;
pub mod shared;
pub mod sync;
pub mod use_db;

use crate::controller::Notice;
use crate::output;

/// A failure that has already been shown to the user as a notice.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Reported(String);

/// Print `notice`; failures also end the command with a non-zero exit.
pub fn report(notice: &Notice) -> anyhow::Result<()> {
    output::notice(notice);
    if notice.is_failure() {
        return Err(Reported(notice.to_string()).into());
    }
    Ok(())
}

/// Report `error` as a failure notice titled `title`.
pub fn fail(title: &str, error: &dyn std::error::Error) -> anyhow::Result<()> {
    report(&Notice::failure(title, error))
}
