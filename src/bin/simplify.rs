//! Prints the title and main content of an HTML page.
//!
//! Usage: `simplify [--json] [--diagnostics] [--encoding LABEL] [--min-line-length N] [FILE]`
//!
//! Reads stdin when no file is given. Set `RUST_LOG=debug` to see repairs
//! made to the markup.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use page_simplifier::{simplify_bytes_with_options, Options, Simplified};

const USAGE: &str =
    "Usage: simplify [--json] [--diagnostics] [--encoding LABEL] [--min-line-length N] [FILE]";

struct Args {
    json: bool,
    path: Option<String>,
    options: Options,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        json: false,
        path: None,
        options: Options::default(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--diagnostics" => args.options.collect_diagnostics = true,
            "--encoding" => {
                args.options.encoding = Some(iter.next().ok_or("--encoding needs a label")?);
            }
            "--min-line-length" => {
                let value = iter.next().ok_or("--min-line-length needs a number")?;
                args.options.min_line_length = value
                    .parse()
                    .map_err(|_| format!("invalid --min-line-length: {value}"))?;
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}\n{USAGE}")),
            path => {
                if args.path.replace(path.to_string()).is_some() {
                    return Err(format!("only one input file is accepted\n{USAGE}"));
                }
            }
        }
    }
    Ok(args)
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut html = Vec::new();
            io::stdin().read_to_end(&mut html)?;
            Ok(html)
        }
    }
}

fn write_text(out: &mut impl Write, page: &Simplified) -> io::Result<()> {
    if !page.title.is_empty() {
        writeln!(out, "Page title: {}", page.title)?;
    }
    writeln!(out, "Main content:")?;
    for line in &page.content {
        writeln!(out, "{line}")?;
    }
    for diagnostic in &page.diagnostics {
        eprintln!("note: {diagnostic}");
    }
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let html = match read_input(args.path.as_deref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let page = match simplify_bytes_with_options(&html, &args.options) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if page.truncated {
        eprintln!("warning: input ended before the document was closed");
    }

    let mut stdout = io::stdout().lock();
    let written = if args.json {
        serde_json::to_writer_pretty(&mut stdout, &page)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(stdout))
    } else {
        write_text(&mut stdout, &page)
    };

    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Failed to write output: {err}");
            ExitCode::FAILURE
        }
    }
}
