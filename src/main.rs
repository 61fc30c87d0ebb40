use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use text_tools::config::Config;
use text_tools::export::{Download, OutputKind};
use text_tools::extract::{EmailExtractor, ExtractTarget, InputLoader, PhoneExtractor};
use text_tools::generate::{
    CampaignCopyAction, CampaignRequest, CampaignSheet, ClockTime, HttpLocationSource,
    QueryGenerator, Region, TimeSpec,
};
use text_tools::help::Tool;
use text_tools::items::{CopyAction, DynamicPairList, LineList};
use text_tools::replace::FindReplaceSession;
use text_tools::storage::{JsonFileStore, Preferences, Theme};
use text_tools::table_display::{
    campaign_table, comparison_table, counts_table, extraction_table, help_text,
    line_list_table, print_error, print_success, print_warning,
};
use text_tools::text::{
    CaseConverter, CaseStyle, DuplicateRemover, LineRepeater, ListComparator, ListSorter,
    SortMode, Splitter, TextCounts,
};
use text_tools::utils::logging::init_tracing;
use text_tools::utils::AppPaths;

#[derive(Parser)]
#[command(name = "text-tools", version)]
#[command(about = "Small deterministic text utilities")]
struct Cli {
    /// Path to config file (default: <config dir>/text-tools/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct InputArgs {
    /// Input files, joined by newlines. Reads stdin when none are given.
    #[arg(short, long = "input", value_name = "FILE")]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct OutputArgs {
    /// Save the result to the output directory instead of printing it,
    /// optionally under a custom filename
    #[arg(long, value_name = "FILENAME", num_args = 0..=1, default_missing_value = "")]
    download: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Copyable lines, kept between runs
    Lines {
        #[command(subcommand)]
        action: LinesCommand,
    },

    /// Turn manual entries and whole files into copyable paragraphs
    Paragraphs {
        /// A paragraph (up to 10)
        #[arg(short, long = "paragraph")]
        paragraph: Vec<String>,
        /// A .txt file treated as one paragraph
        #[arg(short, long = "file", value_name = "FILE")]
        file: Vec<PathBuf>,
        /// A .txt file split into paragraphs at blank lines
        #[arg(long = "split", value_name = "FILE")]
        split: Vec<PathBuf>,
        /// Replace the stored line list with the paragraphs
        #[arg(long)]
        save: bool,
    },

    /// Apply find/replace rules in order
    Replace {
        /// Text to find, matched literally (repeatable, up to 10)
        #[arg(short, long = "find")]
        find: Vec<String>,
        /// Replacement for the find value at the same position
        #[arg(short, long = "replace")]
        replace: Vec<String>,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract unique email addresses with counts
    Emails {
        #[command(flatten)]
        input: InputArgs,
        /// Read .csv/.tsv files as sheets and use their email columns.
        /// Workbooks are always read this way.
        #[arg(long)]
        by_column: bool,
        /// Show the counted table instead of the plain list
        #[arg(long, conflicts_with = "json")]
        table: bool,
        /// Print the counted report as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Extract unique phone numbers with counts
    Phones {
        #[command(flatten)]
        input: InputArgs,
        /// Read .csv/.tsv files as sheets and use only their phone columns.
        /// Workbooks are always read this way.
        #[arg(long)]
        by_column: bool,
        /// Show the counted table instead of the plain list
        #[arg(long, conflicts_with = "json")]
        table: bool,
        /// Print the counted report as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// One search query per location of a country
    Queries {
        /// Service to search for, e.g. "plumber"
        #[arg(short, long)]
        service: String,
        /// uk, usa, canada or australia
        #[arg(short, long)]
        region: Option<Region>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// A list of clock times
    Times {
        /// Start time, 24-hour HH:MM
        #[arg(long)]
        start: Option<String>,
        /// Minutes between entries
        #[arg(long)]
        interval: Option<u32>,
        /// Number of entries
        #[arg(long)]
        count: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Repeat one line many times
    Repeat {
        line: String,
        #[arg(long)]
        count: Option<usize>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Pair emails with rotating subjects, paragraphs and send times
    Campaign {
        /// File with one email per line. Reads stdin when omitted.
        #[arg(short, long, value_name = "FILE")]
        emails: Option<PathBuf>,
        /// A subject (repeatable, up to 10)
        #[arg(short, long = "subject")]
        subject: Vec<String>,
        /// A paragraph (repeatable, up to 10)
        #[arg(short, long = "paragraph")]
        paragraph: Vec<String>,
        /// File of subjects, one per line
        #[arg(long = "subjects-file", value_name = "FILE")]
        subjects_file: Vec<PathBuf>,
        /// File used as one paragraph
        #[arg(long = "paragraphs-file", value_name = "FILE")]
        paragraphs_file: Vec<PathBuf>,
        /// First send time, 24-hour HH:MM
        #[arg(long)]
        start: Option<String>,
        /// Minutes between send times
        #[arg(long)]
        interval: Option<u32>,
        /// Continue when there are more emails than the cap
        #[arg(short, long)]
        yes: bool,
        /// Print tab-separated rows instead of a table
        #[arg(long)]
        tsv: bool,
    },

    /// Sort, reverse or shuffle lines
    Sort {
        /// az, za, num, rev or shuf
        #[arg(short, long, default_value = "az")]
        mode: SortMode,
        /// Seed for a repeatable shuffle
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Change capitalization
    Case {
        /// upper, lower, title or sentence
        #[arg(short, long)]
        style: CaseStyle,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Word, character, sentence and paragraph counts
    Count {
        #[command(flatten)]
        input: InputArgs,
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two lists
    Compare {
        list_a: PathBuf,
        list_b: PathBuf,
        #[arg(long)]
        case_sensitive: bool,
        /// Print the three lists as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove duplicate lines, keeping the first occurrence
    Dedup {
        #[arg(long)]
        case_sensitive: bool,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Describe a tool, or list all tools
    HelpTool { tool: Option<Tool> },

    /// Show or change preferences
    Prefs {
        #[arg(long)]
        nickname: Option<String>,
        /// dark or light
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Show the config path, or write a commented default config
    Config {
        #[arg(long)]
        generate: bool,
    },
}

#[derive(Subcommand)]
enum LinesCommand {
    /// Replace the stored list with the non-blank lines of the input
    Convert {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the stored list
    Show,
    /// Print an item and mark or remove it
    Copy {
        id: String,
        /// mark or remove
        #[arg(long, default_value = "mark")]
        action: CopyAction,
    },
    /// Replace the text of an item
    Update { id: String, text: String },
    /// Delete an item
    Delete { id: String },
    /// Start over
    Clear,
}

struct App {
    config: Config,
    config_path: PathBuf,
    store: Option<JsonFileStore>,
}

impl App {
    fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => (Config::load_from(&path)?, path),
            None => (Config::load()?, Config::get_config_path()?),
        };
        Ok(Self {
            config,
            config_path,
            store: None,
        })
    }

    /// The persistent store, opened on first use. Only the tools that keep
    /// state call this.
    fn store(&mut self) -> Result<&mut JsonFileStore> {
        let store = match self.store.take() {
            Some(store) => store,
            None => JsonFileStore::open(AppPaths::store_file()?)?,
        };
        Ok(self.store.insert(store))
    }

    /// The table theme. A missing or damaged store gives the default.
    fn theme(&mut self) -> Theme {
        match &mut self.store {
            Some(store) => Preferences::new(store).theme(),
            None => match AppPaths::store_file() {
                Ok(path) => Preferences::new(&mut JsonFileStore::open_or_empty(path)).theme(),
                Err(_) => Theme::default(),
            },
        }
    }

    fn output_dir(&self) -> PathBuf {
        self.config.output.dir()
    }

    /// Print `text`, or save it when a download was requested
    fn emit(&self, text: &str, kind: OutputKind, output: &OutputArgs) -> Result<()> {
        match &output.download {
            Some(name) => {
                let name = Some(name.as_str()).filter(|n| !n.trim().is_empty());
                let path = Download::write(&self.output_dir(), kind, name, text)?;
                print_success(&format!("Saved to {}", path.display()));
            }
            None => println!("{}", text),
        }
        Ok(())
    }

    /// Like `emit`, but generations over the large threshold always go to a
    /// file
    fn emit_generated(
        &self,
        text: &str,
        count: usize,
        kind: OutputKind,
        output: &OutputArgs,
    ) -> Result<()> {
        let routed = self.config.large_output_policy().route(kind, count);
        if routed == kind {
            return self.emit(text, kind, output);
        }
        let name = output
            .download
            .as_deref()
            .filter(|n| !n.trim().is_empty());
        let path = Download::write(&self.output_dir(), routed, name, text)?;
        print_warning(&format!(
            "{} entries exceed the display limit of {}; written to {}",
            count,
            self.config.generation.large_threshold,
            path.display()
        ));
        Ok(())
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    let len = text.trim_end_matches(['\r', '\n']).len();
    text.truncate(len);
    Ok(text)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_files(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths.iter().map(|p| read_file(p)).collect()
}

fn read_input(input: &InputArgs) -> Result<String> {
    if input.input.is_empty() {
        return read_stdin();
    }
    Ok(read_files(&input.input)?.join("\n"))
}

fn read_extractor_input(input: &InputArgs, target: ExtractTarget, by_column: bool) -> Result<String> {
    if input.input.is_empty() {
        return read_stdin();
    }
    let loaded = InputLoader::new(target, by_column).load(&input.input)?;
    for path in &loaded.skipped {
        print_warning(&format!("Skipped unsupported file {}", path.display()));
    }
    for name in &loaded.missing_column {
        print_warning(&format!("No column header containing 'phone' in {}", name));
    }
    Ok(loaded.text)
}

fn run_lines(store: &mut JsonFileStore, action: LinesCommand) -> Result<()> {
    let theme = Preferences::new(&mut *store).theme();
    let mut list = LineList::load(store)?;
    match action {
        LinesCommand::Convert { input } => {
            list = LineList::from_text(&read_input(&input)?);
            list.save(store)?;
            print_success(&format!("Converted {} line(s)", list.len()));
            println!("{}", line_list_table(list.items(), theme));
        }
        LinesCommand::Show => {
            if list.is_empty() {
                print_warning("No lines stored. Convert some text first.");
            } else {
                println!("{}", line_list_table(list.items(), theme));
            }
        }
        LinesCommand::Copy { id, action } => {
            let text = list
                .copy(&id, action)
                .with_context(|| format!("No line with id {}", id))?;
            list.save(store)?;
            println!("{}", text);
        }
        LinesCommand::Update { id, text } => {
            if !list.update(&id, &text) {
                bail!("No line with id {}", id);
            }
            list.save(store)?;
            print_success("Line updated");
        }
        LinesCommand::Delete { id } => {
            if !list.delete(&id) {
                bail!("No line with id {}", id);
            }
            list.save(store)?;
            print_success("Line deleted");
        }
        LinesCommand::Clear => {
            list.clear();
            list.save(store)?;
            print_success("Line list cleared");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if let Command::Config { generate } = &cli.command {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        if *generate {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, Config::create_default_with_comments())?;
            print_success(&format!("Config written to {}", path.display()));
        } else {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let mut app = App::load(cli.config)?;
    tracing::debug!(target: "cli", "Using config {}", app.config_path.display());

    match cli.command {
        Command::Lines { action } => run_lines(app.store()?, action)?,

        Command::Paragraphs {
            paragraph,
            file,
            split,
            save,
        } => {
            let mut entries = DynamicPairList::from_values(paragraph);
            let files = read_files(&file)?;
            entries.merge_whole(files.iter().map(String::as_str));
            let blocks: Vec<String> = read_files(&split)?
                .iter()
                .flat_map(|text| Splitter::paragraphs(text))
                .collect();
            entries.merge_whole(blocks.iter().map(String::as_str));
            let values = entries.values();
            let list = LineList::from_entries(values.iter().map(String::as_str))?;
            if save {
                list.save(app.store()?)?;
                print_success(&format!("Stored {} paragraph(s)", list.len()));
            }
            println!("{}", line_list_table(list.items(), app.theme()));
        }

        Command::Replace {
            find,
            replace,
            input,
            output,
        } => {
            if find.len() > text_tools::replace::MAX_RULES {
                print_warning(&format!(
                    "Only the first {} rules are used",
                    text_tools::replace::MAX_RULES
                ));
            }
            let replacements = replace.into_iter().chain(std::iter::repeat(String::new()));
            let mut session = FindReplaceSession::new();
            session.set_rules(find.into_iter().zip(replacements));
            session.set_input(read_input(&input)?);
            if !session.has_active_rules() {
                bail!("Add at least one rule with text to find");
            }
            match session.apply()? {
                Some(count) => {
                    app.emit(session.output(), OutputKind::ReplaceOutput, &output)?;
                    print_success(&format!("{} replacement(s) made", count));
                }
                None => print_warning("Nothing to replace: the input is empty"),
            }
        }

        Command::Emails {
            input,
            by_column,
            table,
            json,
            output,
        } => {
            let text = read_extractor_input(&input, ExtractTarget::Email, by_column)?;
            let report = EmailExtractor::extract(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_empty() {
                print_warning("No email addresses found");
            } else if table {
                println!("{}", extraction_table(&report, "Email", app.theme()));
            } else {
                app.emit(&report.output_text(), OutputKind::UniqueEmails, &output)?;
            }
            eprintln!(
                "{} unique of {} found",
                report.unique_count().to_string().bold(),
                report.total_count()
            );
        }

        Command::Phones {
            input,
            by_column,
            table,
            json,
            output,
        } => {
            let text = read_extractor_input(&input, ExtractTarget::Phone, by_column)?;
            let report = PhoneExtractor::extract(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_empty() {
                print_warning("No phone numbers found");
            } else if table {
                println!("{}", extraction_table(&report, "Phone", app.theme()));
            } else {
                app.emit(&report.output_text(), OutputKind::UniquePhones, &output)?;
            }
            eprintln!(
                "{} unique of {} found",
                report.unique_count().to_string().bold(),
                report.total_count()
            );
        }

        Command::Queries {
            service,
            region,
            output,
        } => {
            let source = HttpLocationSource::new(app.config.locations.clone());
            let queries = QueryGenerator::new(&source).generate(&service, region)?;
            app.emit(&queries.join("\n"), OutputKind::Queries, &output)?;
        }

        Command::Times {
            start,
            interval,
            count,
            output,
        } => {
            let defaults = &app.config.generation;
            let spec = TimeSpec::new(
                start.as_deref().unwrap_or(&defaults.time_start),
                interval.unwrap_or(defaults.time_interval),
                count.unwrap_or(defaults.time_count),
            )?;
            let times = spec.generate();
            app.emit_generated(&times.join("\n"), times.len(), OutputKind::Times, &output)?;
        }

        Command::Repeat {
            line,
            count,
            output,
        } => {
            let count = count.unwrap_or(app.config.generation.repeat_count);
            let text = LineRepeater::repeat(&line, count)?;
            app.emit_generated(&text, count, OutputKind::RepeatedLines, &output)?;
        }

        Command::Campaign {
            emails,
            subject,
            paragraph,
            subjects_file,
            paragraphs_file,
            start,
            interval,
            yes,
            tsv,
        } => {
            let email_text = match &emails {
                Some(path) => read_file(path)?,
                None => read_stdin()?,
            };

            let mut subjects = DynamicPairList::from_values(subject);
            let subject_files = read_files(&subjects_file)?;
            subjects.merge_lines(subject_files.iter().map(String::as_str));

            let mut paragraphs = DynamicPairList::from_values(paragraph);
            let paragraph_files = read_files(&paragraphs_file)?;
            paragraphs.merge_whole(paragraph_files.iter().map(String::as_str));

            let defaults = &app.config.generation;
            let start: ClockTime = start
                .as_deref()
                .unwrap_or(&defaults.campaign_start)
                .parse()?;
            let request = CampaignRequest {
                emails: CampaignRequest::parse_emails(&email_text),
                subjects: subjects.values(),
                paragraphs: paragraphs.values(),
                start,
                interval: interval.unwrap_or(defaults.campaign_interval),
            };

            let cap = defaults.campaign_email_cap;
            if request.exceeds_cap(cap) {
                if !yes {
                    bail!(
                        "{} emails provided; only the first {} will be used. Re-run with --yes to continue.",
                        request.emails.len(),
                        cap
                    );
                }
                print_warning(&format!("Using the first {} of {} emails", cap, request.emails.len()));
            }

            let sheet = CampaignSheet::new(request.build(cap)?, CampaignCopyAction::default());
            if tsv {
                println!("{}", sheet.to_tsv());
            } else {
                println!("{}", campaign_table(sheet.rows(), app.theme()));
            }
            print_success(&format!("Generated {} campaign line(s)", sheet.rows().len()));
        }

        Command::Sort {
            mode,
            seed,
            input,
            output,
        } => {
            let text = read_input(&input)?;
            let sorted = match seed {
                Some(seed) => ListSorter::sort_text(&text, mode, &mut StdRng::seed_from_u64(seed)),
                None => ListSorter::sort_text(&text, mode, &mut rand::rng()),
            };
            app.emit(&sorted, OutputKind::SortedList, &output)?;
        }

        Command::Case {
            style,
            input,
            output,
        } => {
            let converted = CaseConverter::convert(&read_input(&input)?, style);
            app.emit(&converted, OutputKind::CaseConverted, &output)?;
        }

        Command::Count { input, json } => {
            let counts = TextCounts::of(&read_input(&input)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!("{}", counts_table(&counts, app.theme()));
            }
        }

        Command::Compare {
            list_a,
            list_b,
            case_sensitive,
            json,
        } => {
            let comparison =
                ListComparator::compare(&read_file(&list_a)?, &read_file(&list_b)?, case_sensitive);
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
                return Ok(());
            }
            println!("{}", comparison_table(&comparison, app.theme()));
            eprintln!(
                "only in A: {}, only in B: {}, in both: {}",
                comparison.unique_a.len(),
                comparison.unique_b.len(),
                comparison.in_both.len()
            );
        }

        Command::Dedup {
            case_sensitive,
            input,
            output,
        } => {
            let result = DuplicateRemover::remove(&read_input(&input)?, case_sensitive);
            app.emit(&result.text(), OutputKind::UniqueList, &output)?;
            print_success(&format!("{} duplicate line(s) removed", result.removed));
        }

        Command::HelpTool { tool } => match tool {
            Some(tool) => println!("{}", help_text(tool)),
            None => {
                for tool in Tool::ALL {
                    println!("{}{}", format!("{:<26}", tool.id()).bold(), tool.title());
                }
            }
        },

        Command::Prefs { nickname, theme } => {
            let mut prefs = Preferences::new(app.store()?);
            if let Some(nickname) = nickname {
                let saved = prefs.set_nickname(&nickname)?;
                print_success(&format!("Nickname set to {}", saved));
            }
            if let Some(theme) = theme {
                prefs.set_theme(theme)?;
                print_success(&format!("Theme set to {}", theme));
            }
            match prefs.nickname() {
                Some(name) => println!("Welcome, {}!", name),
                None => println!("No nickname set"),
            }
            println!("Theme: {}", prefs.theme());
        }

        Command::Config { .. } => {}
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let log_dir = AppPaths::log_dir().ok();
    init_tracing(log_dir.as_deref());

    if let Err(e) = run(cli) {
        print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
