// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colette::ColorDepth;
use tracing_core::LevelFilter;

use crate::{DEFAULT_LOG_FILE_NAME, TracingConfig, WriterConfig};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "colette")]
#[command(about = "🎨 Convert colors between truecolor, xterm 256-color and 16-color palettes")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nColors are written as `#rrggbb`, `r,g,b`, or a 256-color palette index.\nUSAGE 📓:\n  colette [\x1b[32mcommand\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    /// Print the nearest xterm 256-color palette index for a color.
    #[command(name = "to256")]
    To256 {
        /// `#rrggbb`, `r,g,b`, or a palette index.
        color: String,
    },

    /// Print the legacy 16-color palette index for a color.
    #[command(name = "to16")]
    To16 {
        /// `#rrggbb`, `r,g,b`, or a palette index.
        color: String,
    },

    /// Print the `#rrggbb` value of a 256-color palette index.
    #[command(name = "to-rgb")]
    ToRgb {
        /// Palette index in the range 0-255.
        index: u8,
    },

    /// Pack red, green and blue channels into a single `0xrrggbb` value.
    Join { red: u8, green: u8, blue: u8 },

    /// Unpack a `0xrrggbb` (or decimal) value into its red, green and blue channels.
    Split {
        /// Decimal, or `0x` prefixed hex.
        packed: String,
    },

    /// Map a color down to the given color depth.
    Degrade {
        /// `#rrggbb`, `r,g,b`, or a palette index.
        color: String,

        #[arg(long, short = 'd', value_enum, default_value_t = DepthArg::Ansi256)]
        depth: DepthArg,
    },

    /// Print every entry of the 256-color palette.
    Palette {
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging (see --log-file)."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Path of the log file written when logging is enabled."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        value_enum,
        env = "COLETTE_LOG_LEVEL",
        default_value_t = LogLevelArg::Debug,
        help = "Log level used when logging is enabled."
    )]
    pub log_level: LogLevelArg,

    #[arg(
        global = true,
        long,
        help = "Don't print colored swatches. The NO_COLOR env var has the same effect."
    )]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepthArg {
    Truecolor,
    Ansi256,
    Ansi16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<DepthArg> for ColorDepth {
    fn from(value: DepthArg) -> Self {
        match value {
            DepthArg::Truecolor => ColorDepth::Truecolor,
            DepthArg::Ansi256 => ColorDepth::Ansi256,
            DepthArg::Ansi16 => ColorDepth::Ansi16,
        }
    }
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<&GlobalOption> for TracingConfig {
    fn from(value: &GlobalOption) -> Self {
        if value.enable_logging {
            TracingConfig {
                writer_config: WriterConfig::File(value.log_file.clone()),
                level_filter: value.log_level.into(),
            }
        } else {
            TracingConfig::default()
        }
    }
}

impl GlobalOption {
    /// Colored output is on unless `--no-color` is passed, or the `NO_COLOR` env var is
    /// set to a non empty value (<https://no-color.org/>).
    #[must_use]
    pub fn use_color(&self) -> bool {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|it| !it.is_empty());
        !(self.no_color || no_color_env)
    }

    /// Like [`Self::use_color`], and `stream` must also be a terminal. Output that is
    /// piped or redirected to a file stays plain.
    #[must_use]
    pub fn use_color_on(&self, stream: &impl IsTerminal) -> bool {
        self.use_color() && stream.is_terminal()
    }
}
