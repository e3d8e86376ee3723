use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use directories::ProjectDirs;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crop_advisor::{
    analysis::Advisor,
    chat::{format_rupees, t, Conversation, Lang, MessageKey},
    config::AdvisorConfig,
    io::{self, load_lang, load_state, save_lang, save_state, PersistedState},
    models::{crop_profiles, FarmInput, Recommendation, SoilType},
    platform::{FileStore, LineListener, SilentSpeaker, TextToSpeech, TranscriptSpeaker},
    visualization::{
        print_assessment_table, print_crop_catalog, print_recommendations,
        print_sustainability_chart,
    },
};

#[derive(Parser)]
#[command(
    name = "crop-advisor",
    about = "KrishiAI crop advisor - score crops against your farm and explain the best fit",
    version,
    author
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for saved language, form and chat history
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Farm conditions. Flags override values read from `--input` or the config.
#[derive(Args)]
struct FarmArgs {
    /// Read farm input from a JSON or TOML file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Soil type: loam, clay, sandy, or silty
    #[arg(long)]
    soil: Option<SoilType>,

    /// Annual rainfall in mm
    #[arg(long)]
    rainfall: Option<f64>,

    /// Mean growing-season temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    temp: Option<f64>,

    /// Soil pH
    #[arg(long)]
    ph: Option<f64>,

    /// Farm area in hectares
    #[arg(long)]
    acreage: Option<f64>,

    /// Whether the farm is irrigated (true/false)
    #[arg(long)]
    irrigation: Option<bool>,

    /// Budget in ₹ per hectare
    #[arg(long)]
    budget: Option<f64>,

    /// Crop grown last season (empty for none)
    #[arg(long)]
    previous_crop: Option<String>,

    /// Skip range checks on the farm values
    #[arg(long)]
    no_validate: bool,
}

impl FarmArgs {
    fn apply(&self, mut input: FarmInput) -> FarmInput {
        if let Some(soil) = self.soil {
            input.soil = soil;
        }
        if let Some(rainfall) = self.rainfall {
            input.rainfall = rainfall;
        }
        if let Some(temp) = self.temp {
            input.temp = temp;
        }
        if let Some(ph) = self.ph {
            input.ph = ph;
        }
        if let Some(acreage) = self.acreage {
            input.acreage = acreage;
        }
        if let Some(irrigation) = self.irrigation {
            input.irrigation = irrigation;
        }
        if let Some(budget) = self.budget {
            input.budget = budget;
        }
        if let Some(previous) = &self.previous_crop {
            input.previous_crop = previous.clone();
        }
        input
    }

    /// Build the farm input on top of `base`, reading `--input` first when given.
    fn resolve(&self, base: FarmInput) -> Result<FarmInput> {
        let base = match &self.input {
            Some(path) => io::read_farm_input(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => base,
        };
        let input = self.apply(base);
        if !self.no_validate {
            input.validate()?;
        }
        Ok(input)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the top crops for a farm
    Recommend {
        #[command(flatten)]
        farm: FarmArgs,

        /// Display language: en or hi
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Also write the recommendations to a .json or .csv file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Show a sustainability bar chart
        #[arg(long)]
        chart: bool,
    },

    /// Show how every crop was scored
    Explain {
        #[command(flatten)]
        farm: FarmArgs,

        /// Only explain this crop
        #[arg(short, long)]
        crop: Option<String>,
    },

    /// List the built-in crop catalog
    Crops,

    /// Recommend crops for every farm in a CSV file
    Batch {
        /// CSV file with one farm per row
        #[arg(short, long)]
        input: PathBuf,

        /// Write all results to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Display language: en or hi
        #[arg(short, long)]
        lang: Option<Lang>,
    },

    /// Ask the advisor questions; each line of input is one message
    Chat {
        #[command(flatten)]
        farm: FarmArgs,

        /// Display language: en or hi (saved for next time)
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Read answers aloud (written as a transcript to stderr)
        #[arg(long)]
        speak: bool,

        /// Treat the conversation as having a leaf/soil image attached
        #[arg(long)]
        image: bool,

        /// Start a new conversation instead of resuming the saved one
        #[arg(long)]
        fresh: bool,
    },

    /// Show or set the saved display language
    Lang {
        /// Language to save: en or hi
        code: Option<Lang>,
    },

    /// Start the web UI server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

#[derive(Serialize)]
struct BatchResult<'a> {
    name: &'a str,
    recommendations: Vec<Recommendation>,
}

fn load_config(path: Option<&Path>) -> Result<AdvisorConfig> {
    if let Some(path) = path {
        return AdvisorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let default_path = ProjectDirs::from("in", "KrishiAI", "crop-advisor")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    match default_path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "loading config");
            Ok(AdvisorConfig::load(&path)?)
        }
        _ => Ok(AdvisorConfig::default()),
    }
}

fn open_store(cli_dir: Option<&Path>, config: &AdvisorConfig) -> Result<FileStore> {
    let dir = match cli_dir.or(config.state_dir.as_deref()) {
        Some(dir) => dir.to_path_buf(),
        None => match FileStore::default_location() {
            Some(dir) => dir,
            None => anyhow::bail!("No home directory found. Pass --state-dir"),
        },
    };
    let store = FileStore::open(&dir)?;
    info!(path = %store.path().display(), "opened state store");
    Ok(store)
}

fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty())
}

/// The saved choice, then the configured language, then the system locale.
fn resolve_lang(config: &AdvisorConfig, store: &FileStore) -> Result<Lang> {
    let fallback = config
        .language
        .map(|lang| lang.code().to_string())
        .or_else(system_locale);
    Ok(load_lang(store, fallback.as_deref())?)
}

fn default_farm(config: &AdvisorConfig, no_validate: bool) -> Result<FarmInput> {
    if no_validate {
        Ok(config.farm.to_input())
    } else {
        Ok(config.default_farm()?)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let advisor = Advisor::default();

    match cli.command {
        Commands::Recommend {
            farm,
            lang,
            format,
            export,
            pretty,
            chart,
        } => {
            let input = farm.resolve(default_farm(&config, farm.no_validate)?)?;
            let lang = lang.or(config.language).unwrap_or_default();
            let recs = advisor.recommend(&input);

            match format.to_lowercase().as_str() {
                "table" => {
                    println!(
                        "\n{}",
                        format!(
                            "{}: {} soil, {}mm, {}°C, pH {}",
                            t(MessageKey::AppName, lang),
                            input.soil,
                            input.rainfall,
                            input.temp,
                            input.ph
                        )
                        .bold()
                        .cyan()
                    );
                    print_recommendations(&recs, lang);
                    if let Some(top) = recs.first() {
                        if input.acreage > 0.0 {
                            println!(
                                "  Whole farm ({} ha, {}): ₹{}",
                                input.acreage,
                                top.crop,
                                format_rupees(top.profit_per_ha * input.acreage)
                            );
                        }
                    }
                    if chart {
                        print_sustainability_chart(&recs);
                    }
                }
                "json" => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&recs)?
                    } else {
                        serde_json::to_string(&recs)?
                    };
                    println!("{json}");
                }
                _ => anyhow::bail!("Unknown output format: {format}. Use: table or json"),
            }

            if let Some(path) = export {
                io::write_recommendations(&recs, &path, pretty)?;
                eprintln!(
                    "{} Wrote {} recommendations to {}",
                    "Success:".green().bold(),
                    recs.len(),
                    path.display()
                );
            }
        }

        Commands::Explain { farm, crop } => {
            let input = farm.resolve(default_farm(&config, farm.no_validate)?)?;
            let assessments = match crop {
                Some(name) => match advisor.assess(&input, &name) {
                    Some(a) => vec![a],
                    None => anyhow::bail!("Unknown crop: {name}. Run `crop-advisor crops`"),
                },
                None => advisor.rank_all(&input),
            };
            print_assessment_table(&assessments);
        }

        Commands::Crops => {
            print_crop_catalog(crop_profiles());
        }

        Commands::Batch {
            input,
            output,
            lang,
        } => {
            let lang = lang.or(config.language).unwrap_or_default();
            let records = io::read_farm_inputs_csv(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            println!(
                "\n{}",
                format!("Batch: {} farms from {}", records.len(), input.display())
                    .bold()
                    .cyan()
            );

            let mut results = Vec::with_capacity(records.len());
            for record in &records {
                let recs = advisor.recommend(&record.input);
                println!("\n{}", record.name.bold());
                print_recommendations(&recs, lang);
                results.push(BatchResult {
                    name: &record.name,
                    recommendations: recs,
                });
            }

            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&results)?)?;
                eprintln!(
                    "{} Wrote {} farms to {}",
                    "Success:".green().bold(),
                    results.len(),
                    path.display()
                );
            }
        }

        Commands::Chat {
            farm,
            lang,
            speak,
            image,
            fresh,
        } => {
            let mut store = open_store(cli.state_dir.as_deref(), &config)?;
            let lang = match lang {
                Some(lang) => {
                    save_lang(&mut store, lang)?;
                    lang
                }
                None => resolve_lang(&config, &store)?,
            };

            let saved = if fresh { None } else { load_state(&store)? };
            let (saved_form, history) = match saved {
                Some(state) => (state.form, state.messages),
                None => (None, Vec::new()),
            };
            let base = match saved_form {
                Some(form) => form,
                None => default_farm(&config, farm.no_validate)?,
            };
            let input = farm.resolve(base)?;
            let recs = advisor.recommend(&input);

            let mut convo = Conversation::from_messages(history);
            convo.attach_image(image);
            let mut speaker: Box<dyn TextToSpeech> = if speak || config.speech {
                Box::new(TranscriptSpeaker::new(std::io::stderr()))
            } else {
                Box::new(SilentSpeaker)
            };

            println!("{}", t(MessageKey::ChatWithAi, lang).bold().cyan());
            if !convo.messages().is_empty() {
                println!("  ({} earlier messages)", convo.messages().len());
            }
            println!("{}", t(MessageKey::Greeting, lang));

            let stdin = std::io::stdin();
            let mut listener = LineListener::new(stdin.lock());
            loop {
                print!("> ");
                std::io::stdout().flush()?;
                if !convo.listen(&mut listener, lang) {
                    break;
                }
                match convo.draft().trim() {
                    "/quit" | "/exit" => break,
                    "/image" => {
                        convo.set_draft("");
                        convo.attach_image(true);
                        continue;
                    }
                    _ => {}
                }

                let answer = convo
                    .send(&recs, lang, speaker.as_mut())
                    .map(|m| m.text.clone());
                match answer {
                    Some(text) => println!("{} {}", "KrishiAI:".green().bold(), text),
                    None => {
                        eprintln!("{}: no recommendation available", "Warning".yellow());
                        convo.set_draft("");
                        continue;
                    }
                }

                save_state(
                    &mut store,
                    &PersistedState {
                        form: Some(input.clone()),
                        messages: convo.messages().to_vec(),
                    },
                )?;
            }
        }

        Commands::Lang { code } => {
            let mut store = open_store(cli.state_dir.as_deref(), &config)?;
            match code {
                Some(lang) => {
                    save_lang(&mut store, lang)?;
                    println!(
                        "{} Language set to {} ({})",
                        "Success:".green().bold(),
                        lang.label(),
                        lang.code()
                    );
                }
                None => {
                    let lang = resolve_lang(&config, &store)?;
                    println!("{} ({})", lang.label(), lang.code());
                }
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port } => {
            let store = open_store(cli.state_dir.as_deref(), &config)?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(crop_advisor::web::start_server(port, Box::new(store)))?;
        }
    }

    Ok(())
}
