//! Implementation of the `lingo translate` command.

use std::path::PathBuf;

use clap::ValueEnum;
use lingo::{Config, Data, FallbackMap, LocaleStrategy, PageContext, PageDictionary, Request, Value};
use serde::Serialize;

use crate::loader::{load_dictionaries, load_json};
use crate::output::print_translation_diagnostic;

/// Arguments for the translate command.
#[derive(Debug, clap::Args)]
pub struct TranslateArgs {
    /// Translation key (literal or dot-path)
    pub key: String,

    /// Dictionary files (.json), earlier files win on conflict
    #[arg(short, long = "dictionary", required = true)]
    pub dictionaries: Vec<PathBuf>,

    /// Explicit locale, overriding anything inferred from the page
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Page URL
    #[arg(long)]
    pub url: Option<String>,

    /// Page input file path without extension
    #[arg(long)]
    pub file_path_stem: Option<String>,

    /// Page language attribute
    #[arg(long)]
    pub lang: Option<String>,

    /// Page signal the locale is inferred from
    #[arg(long, value_enum, default_value_t = StrategyArg::Url)]
    pub strategy: StrategyArg,

    /// Fallbacks in locale=fallback format, `*` for the default (repeatable)
    #[arg(long = "fallback", value_parser = parse_key_val)]
    pub fallbacks: Vec<(String, String)>,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// JSON file with interpolation data; `--param` values override it
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// JSON file with page-local translations
    #[arg(long)]
    pub page_dictionary: Option<PathBuf>,

    /// Print templates without substituting data
    #[arg(long)]
    pub no_interpolate: bool,

    /// Suppress fallback warnings
    #[arg(long)]
    pub silent: bool,

    /// Exit with non-zero code if the key is not found
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Locale inference strategy.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Url,
    FilePathStem,
    Lang,
}

impl From<StrategyArg> for LocaleStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Url => LocaleStrategy::UrlSegment,
            StrategyArg::FilePathStem => LocaleStrategy::FilePathStem,
            StrategyArg::Lang => LocaleStrategy::PageLang,
        }
    }
}

/// JSON output for translate results.
#[derive(Serialize)]
struct TranslateResult<'a> {
    text: &'a str,
    locale: Option<&'a str>,
    found: bool,
    diagnostics: Vec<DiagnosticJson<'a>>,
}

#[derive(Serialize)]
struct DiagnosticJson<'a> {
    severity: String,
    message: String,
    key: &'a str,
    locale: Option<&'a str>,
    fallback_locale: Option<&'a str>,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Convert a command-line parameter, preferring integers over strings.
fn param_value(raw: String) -> Value {
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::from(raw),
    }
}

/// Run the translate command.
pub fn run_translate(args: TranslateArgs) -> miette::Result<i32> {
    let dictionary = load_dictionaries(&args.dictionaries)?;

    let mut data: Data = match &args.data {
        Some(path) => load_json(path)?,
        None => Data::new(),
    };
    for (name, raw) in args.params {
        data.insert(name, param_value(raw));
    }

    let page_dictionary: Option<PageDictionary> = match &args.page_dictionary {
        Some(path) => Some(load_json(path)?),
        None => None,
    };

    let page = PageContext::builder()
        .maybe_url(args.url)
        .maybe_file_path_stem(args.file_path_stem)
        .maybe_lang(args.lang)
        .build();

    let config = Config::builder()
        .dictionary(dictionary)
        .fallbacks(args.fallbacks.into_iter().collect::<FallbackMap>())
        .interpolate(!args.no_interpolate)
        .silent(args.silent)
        .strategy(args.strategy.into())
        .build();

    let request = Request::builder()
        .key(&args.key)
        .data(&data)
        .maybe_locale(args.locale.as_deref())
        .page(&page)
        .maybe_page_dictionary(page_dictionary.as_ref())
        .build();

    let translation = config.translate(&request);
    let found = translation.is_found();

    if args.json {
        let output = TranslateResult {
            text: &translation.text,
            locale: config.resolve_locale(&request),
            found,
            diagnostics: translation
                .diagnostics
                .iter()
                .map(|d| DiagnosticJson {
                    severity: d.severity().to_string(),
                    message: d.to_string(),
                    key: d.key(),
                    locale: d.locale(),
                    fallback_locale: d.fallback_locale(),
                })
                .collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        for diagnostic in &translation.diagnostics {
            print_translation_diagnostic(diagnostic);
        }
        println!("{}", translation.text);
    }

    if args.strict && !found {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
