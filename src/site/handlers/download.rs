//! Mock resume download.

use anyhow::Result;

use super::{Handler, HandlerContext, ViewCommand};
use crate::config::DOWNLOAD_NOTICE;
use crate::site::events::BrowserEvent;

/// Shows a notice in place of producing a file
pub struct DownloadNoticeHandler;

impl Handler for DownloadNoticeHandler {
    fn handle(&self, _context: &HandlerContext, _event: &BrowserEvent) -> Result<Vec<ViewCommand>> {
        Ok(vec![ViewCommand::ShowNotice {
            message: DOWNLOAD_NOTICE.to_string(),
        }])
    }

    fn name(&self) -> &'static str {
        "DownloadNotice"
    }
}
