// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configure how [miette](https://docs.rs/miette/latest/miette/index.html) displays
//! the [`Report`](https://docs.rs/miette/latest/miette/struct.Report.html) returned
//! from `main() -> miette::Result<_>` when the program errors out.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(issues_url: &'static str, use_color: bool) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(80, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        let rgb_colors = if use_color {
            miette::RgbColors::Preferred
        } else {
            miette::RgbColors::Never
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .color(use_color)
                .rgb_colors(rgb_colors)
                .unicode(use_color)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
