//! arpa2ipa - CMU Pronouncing Dictionary to IPA converter
//!
//! Reads a CMUdict-format file and writes one `<word>\t/<ipa>/` row per
//! entry. Entries that fail to convert are logged and skipped; the run only
//! aborts on I/O errors.

use arpa2ipa::config::load_config;
use arpa2ipa::convert_styled;
use arpa2ipa::dict::{parse_line, read_source, RowWriter};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

struct Args {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next()?);
    let output = PathBuf::from(args.next()?);
    let config = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return None;
    }
    Some(Args {
        input,
        output,
        config,
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args() {
        Some(args) => args,
        None => {
            eprintln!("usage: arpa2ipa <cmudict-file> <output-file> [config.json]");
            process::exit(2);
        }
    };

    let config = load_config(args.config.as_deref());
    let style = config.style();

    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let file = match File::create(&args.output) {
        Ok(file) => file,
        Err(e) => {
            log::error!("failed to create {}: {}", args.output.display(), e);
            process::exit(1);
        }
    };
    let mut writer = RowWriter::new(BufWriter::new(file), config.dedup);

    let mut converted = 0usize;
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for line in source.lines() {
        let entry = match parse_line(line) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                log::warn!("skipping malformed line: {}", e);
                skipped += 1;
                continue;
            }
        };

        let ipa = match convert_styled(&entry.transcription, &style) {
            Ok(ipa) => ipa,
            Err(e) => {
                log::warn!("skipping \"{}\": {}", entry.word, e);
                skipped += 1;
                continue;
            }
        };

        match writer.write_row(&entry.word, &ipa) {
            Ok(true) => converted += 1,
            Ok(false) => duplicates += 1,
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = writer.finish() {
        log::error!("{}", e);
        process::exit(1);
    }

    log::info!(
        "wrote {} rows to {} ({} skipped, {} duplicates dropped)",
        converted,
        args.output.display(),
        skipped,
        duplicates
    );
}
