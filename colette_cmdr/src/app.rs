// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use colette::{Color, ColorDepth, RgbValue, TransformColor, color256_to_rgb, join_rgb,
              split_rgb, try_parse_packed_rgb};
use miette::IntoDiagnostic;
use tracing::{debug, info};

use crate::{CLIArg, CLICommand, OutputFormat, palette_entries, render_palette_json,
            render_palette_text};

/// Run the command in `cli_arg`, and write its result to `out`.
///
/// # Errors
///
/// Returns an error if a color argument can't be parsed, or writing to `out` fails.
pub fn run_app(cli_arg: &CLIArg, out: &mut impl Write) -> miette::Result<()> {
    debug!(?cli_arg, "run_app");

    match &cli_arg.command {
        CLICommand::To256 { color } => {
            let ansi = color.parse::<Color>()?.as_ansi();
            info!(%color, %ansi, "to256");
            writeln!(out, "{ansi}").into_diagnostic()?;
        }

        CLICommand::To16 { color } => {
            let ansi16 = color.parse::<Color>()?.as_ansi16();
            info!(%color, %ansi16, "to16");
            writeln!(out, "{ansi16}").into_diagnostic()?;
        }

        CLICommand::ToRgb { index } => {
            let rgb = RgbValue::from(color256_to_rgb(*index));
            info!(index, %rgb, "to-rgb");
            writeln!(out, "{rgb}").into_diagnostic()?;
        }

        CLICommand::Join { red, green, blue } => {
            let packed = join_rgb(*red, *green, *blue);
            info!(red, green, blue, packed, "join");
            writeln!(out, "0x{packed:06x}").into_diagnostic()?;
        }

        CLICommand::Split { packed } => {
            let (red, green, blue) = split_rgb(try_parse_packed_rgb(packed)?);
            info!(%packed, red, green, blue, "split");
            writeln!(out, "{red} {green} {blue}").into_diagnostic()?;
        }

        CLICommand::Degrade { color, depth } => {
            let target = ColorDepth::from(*depth);
            let degraded = color.parse::<Color>()?.degrade(target);
            info!(%color, %target, %degraded, "degrade");
            writeln!(out, "{degraded}").into_diagnostic()?;
        }

        CLICommand::Palette { format } => {
            let entries = palette_entries();
            let rendered = match format {
                OutputFormat::Text => render_palette_text(
                    &entries,
                    cli_arg.global_options.use_color_on(&std::io::stdout()),
                ),
                OutputFormat::Json => render_palette_json(&entries)?,
            };
            debug!(entries = entries.len(), ?format, "palette");
            out.write_all(rendered.as_bytes()).into_diagnostic()?;
            if !rendered.ends_with('\n') {
                writeln!(out).into_diagnostic()?;
            }
        }
    }

    Ok(())
}
