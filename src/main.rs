// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minaret CLI entrypoint.
//!
//! Runs the interactive TUI. All data is a built-in sample set; there is nothing to configure
//! beyond the starting screen.

use std::error::Error;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--detail] [--reveal-all]\n\n--detail starts on the congregation timetable screen instead of the overview.\n--reveal-all starts with every nearby mosque already listed."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    detail: bool,
    reveal_all: bool,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--detail" => {
                if options.detail {
                    return Err(());
                }
                options.detail = true;
            }
            "--reveal-all" => {
                if options.reveal_all {
                    return Err(());
                }
                options.reveal_all = true;
            }
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "minaret".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        minaret::tui::run_with_options(minaret::tui::RunOptions {
            start_on_detail: options.detail,
            reveal_all: options.reveal_all,
        })
    })();

    if let Err(err) = result {
        eprintln!("minaret: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_detail_flag() {
        let options = parse_options(["--detail".to_owned()].into_iter()).expect("parse options");
        assert!(options.detail);
        assert!(!options.reveal_all);
    }

    #[test]
    fn parses_reveal_all_flag() {
        let options =
            parse_options(["--reveal-all".to_owned()].into_iter()).expect("parse options");
        assert!(options.reveal_all);
        assert!(!options.detail);
    }

    #[test]
    fn parses_both_flags_in_any_order() {
        let options =
            parse_options(["--detail".to_owned(), "--reveal-all".to_owned()].into_iter())
                .expect("parse options");
        assert!(options.detail);
        assert!(options.reveal_all);

        let options =
            parse_options(["--reveal-all".to_owned(), "--detail".to_owned()].into_iter())
                .expect("parse options");
        assert!(options.detail);
        assert!(options.reveal_all);
    }

    #[test]
    fn rejects_unknown_args() {
        parse_options(["--nope".to_owned()].into_iter()).unwrap_err();
        parse_options(["extra".to_owned()].into_iter()).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(["--detail".to_owned(), "--detail".to_owned()].into_iter()).unwrap_err();
        parse_options(["--reveal-all".to_owned(), "--reveal-all".to_owned()].into_iter())
            .unwrap_err();
    }
}
