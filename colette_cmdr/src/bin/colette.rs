// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use colette_cmdr::{CLIArg, ISSUES_URL, TracingConfig, run_app,
                   setup_default_miette_global_report_handler,
                   try_initialize_logging_global};
use tracing::debug;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    setup_default_miette_global_report_handler(
        ISSUES_URL,
        cli_arg.global_options.use_color_on(&std::io::stderr()),
    );

    try_initialize_logging_global(&TracingConfig::from(&cli_arg.global_options))?;
    debug!("Start logging... cli_arg: {cli_arg:?}");

    let mut stdout = std::io::stdout().lock();
    run_app(&cli_arg, &mut stdout)
}
