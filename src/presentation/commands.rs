// Inbound UI commands - the stand-in for tray button clicks
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::refresh_controller::RefreshController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    ToggleAutoRefresh,
    Refresh,
    Quit,
}

impl UiCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "toggle-auto-refresh" => Some(Self::ToggleAutoRefresh),
            "refresh" => Some(Self::Refresh),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Drive the controller from newline-delimited commands until `quit` or EOF.
pub async fn run_command_loop<R>(
    reader: R,
    controller: &mut RefreshController,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match UiCommand::parse(&line) {
            Some(UiCommand::ToggleAutoRefresh) => {
                controller.toggle_auto_refresh();
            }
            Some(UiCommand::Refresh) => controller.refresh().await,
            Some(UiCommand::Quit) => {
                controller.quit().await;
                break;
            }
            None => tracing::warn!("ignoring unknown command: {line:?}"),
        }
    }
    Ok(())
}
