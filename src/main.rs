use std::process;
use std::time::Instant;

use anyhow::Context;
use log::{debug, error};
use serde::Serialize;
use structopt::StructOpt;

use word_trie::alphabet::normalize;
use word_trie::wordlist::wordlist::{FileFormat, LoadSummary, WordSource, Wordlist};

/// Load a word list and print the words starting with each prefix.
#[derive(StructOpt)]
#[structopt(name = "word-trie")]
struct Cli {
    /// The word list to read, one word per line ("-" for standard input)
    #[structopt(parse(from_os_str))]
    source: WordSource,
    /// Prefixes to look up
    prefixes: Vec<String>,
    /// Uppercase words and prefixes and strip characters outside A-Z
    #[structopt(long)]
    normalize: bool,
    /// Fail on the first line that is not a valid word
    #[structopt(long)]
    strict: bool,
    /// Print the load summary and matches as JSON
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct PrefixMatches {
    prefix: String,
    words: Vec<String>,
}

#[derive(Serialize, Debug)]
struct Report {
    loaded: LoadSummary,
    queries: Vec<PrefixMatches>,
}

/// Looks up every prefix, normalizing them first when the list was normalized.
fn build_report(wl: &Wordlist, loaded: LoadSummary, prefixes: Vec<String>, normalize_prefixes: bool)
                -> anyhow::Result<Report> {
    let start = Instant::now();
    let mut queries = vec![];
    for prefix in prefixes {
        let prefix = if normalize_prefixes { normalize(&prefix) } else { prefix };
        let words = wl.words_by_prefix(&prefix)
            .with_context(|| format!("looking up {:?}", prefix))?;
        queries.push(PrefixMatches { prefix, words });
    }
    debug!("{} queries in {}s", queries.len(), start.elapsed().as_secs_f64());
    Ok(Report { loaded, queries })
}

/// One word per line. With several prefixes each group gets a `PREFIX:` header
/// and groups are separated by a blank line.
fn render_text(report: &Report) -> String {
    let grouped = report.queries.len() > 1;
    let mut out = String::new();
    for (i, query) in report.queries.iter().enumerate() {
        if grouped {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{}:\n", query.prefix));
        }
        query.words.iter().for_each(|word| {
            out.push_str(word);
            out.push('\n');
        });
    }
    out
}

fn run(args: Cli) -> anyhow::Result<()> {
    let format = FileFormat::builder()
        .normalize(args.normalize)
        .skip_invalid(!args.strict)
        .build();

    let mut wl = Wordlist::new();
    let loaded = wl.load(&args.source, &format)
        .with_context(|| format!("loading words from {}", args.source))?;

    let report = build_report(&wl, loaded, args.prefixes, args.normalize)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::from_args()) {
        error!("{:#}", e);
        process::exit(1);
    }
}
