//! Range command handler: prints a page range for the terminal or as JSON.

use anyhow::Context;

use crate::api::dto::PageRangeRequest;
use crate::config::PaginationConfig;
use crate::error::AppResult;
use crate::pagination::{PageRange, render_range};

/// Arguments of the `range` subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeArgs {
    pub total_count: u64,
    pub page_size: Option<u64>,
    pub current_page: u64,
    pub sibling_count: Option<u64>,
    pub json: bool,
}

pub struct RangeCommandHandler {
    limits: PaginationConfig,
}

impl RangeCommandHandler {
    pub fn new(limits: PaginationConfig) -> Self {
        Self { limits }
    }

    pub fn execute(&self, args: RangeArgs) -> AppResult<()> {
        println!("{}", self.render(args)?);
        Ok(())
    }

    /// Compute the range and format it as command output.
    pub fn render(&self, args: RangeArgs) -> AppResult<String> {
        let range = self.compute(args)?;

        if args.json {
            let json = serde_json::to_string_pretty(&range)
                .context("Failed to serialize page range")?;
            return Ok(json);
        }

        Ok(format!(
            "{}\nPage {} of {}",
            render_range(&range),
            range.current_page,
            range.total_pages
        ))
    }

    fn compute(&self, args: RangeArgs) -> AppResult<PageRange> {
        let request = PageRangeRequest::resolve(
            args.total_count,
            args.page_size,
            args.current_page,
            args.sibling_count,
            &self.limits,
        )?;
        tracing::debug!(?request, "Computing page range");
        request.compute()
    }
}
