use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "creatomate", version)]
struct Cli {
    /// API key of the Creatomate project.
    #[arg(long, env = "CREATOMATE_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the API root.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a render and wait for it to finish.
    Render(RenderArgs),
    /// Print the current state of a render.
    Fetch {
        /// Render id.
        id: String,
    },
    /// Print the request body a render would send, without sending it.
    Preview(RequestArgs),
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// Source document JSON.
    #[arg(long, conflicts_with = "template_id", required_unless_present = "template_id")]
    source: Option<PathBuf>,

    /// Render a stored template instead of a source document.
    #[arg(long)]
    template_id: Option<String>,

    /// JSON object of template modifications.
    #[arg(long, requires = "template_id")]
    modifications: Option<PathBuf>,

    /// Override the output format.
    #[arg(long, value_enum)]
    output_format: Option<FormatChoice>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Give up waiting after this many seconds (0 = 15 minutes, at most 1 hour).
    #[arg(long, default_value_t = 0)]
    timeout_secs: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpg,
    Png,
    Gif,
    Mp4,
}

impl From<FormatChoice> for creatomate::OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Jpg => Self::Jpg,
            FormatChoice::Png => Self::Png,
            FormatChoice::Gif => Self::Gif,
            FormatChoice::Mp4 => Self::Mp4,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.cmd {
        Command::Render(args) => cmd_render(&cli, args).await,
        Command::Fetch { id } => cmd_fetch(&cli, id).await,
        Command::Preview(args) => cmd_preview(args),
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let f = File::open(path).with_context(|| format!("open '{}'", path.display()))?;
    let v = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse JSON in '{}'", path.display()))?;
    Ok(v)
}

fn build_options(args: &RequestArgs) -> anyhow::Result<creatomate::RenderOptions> {
    let mut options = match (&args.source, &args.template_id) {
        (Some(path), _) => creatomate::RenderOptions::from_source(read_json(path)?),
        (None, Some(id)) => creatomate::RenderOptions::from_template(id),
        (None, None) => anyhow::bail!("either --source or --template-id is required"),
    };

    if let Some(path) = &args.modifications {
        let modifications: Map<String, Value> = match read_json(path)? {
            Value::Object(map) => map,
            _ => anyhow::bail!("modifications in '{}' must be a JSON object", path.display()),
        };
        options.modifications = Some(modifications);
    }
    options.output_format = args.output_format.map(Into::into);
    Ok(options)
}

fn make_client(cli: &Cli) -> anyhow::Result<creatomate::Client> {
    let api_key = cli
        .api_key
        .as_deref()
        .context("missing API key (pass --api-key or set CREATOMATE_API_KEY)")?;
    let mut builder = creatomate::Client::builder().api_key(api_key);
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url);
    }
    Ok(builder.build()?)
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

async fn cmd_render(cli: &Cli, args: &RenderArgs) -> anyhow::Result<()> {
    let options = build_options(&args.request)?;
    let client = make_client(cli)?;

    let timeout = Duration::from_secs(args.timeout_secs);
    match client.render(&options, timeout).await {
        Ok(renders) => print_json(&renders),
        Err(e) => {
            if !e.finished.is_empty() {
                print_json(&e.finished)?;
            }
            Err(anyhow::Error::new(e).context("render did not complete"))
        }
    }
}

async fn cmd_fetch(cli: &Cli, id: &str) -> anyhow::Result<()> {
    let client = make_client(cli)?;
    let render = client
        .fetch(id)
        .await
        .with_context(|| format!("fetch render '{id}'"))?;
    print_json(&render)
}

fn cmd_preview(args: &RequestArgs) -> anyhow::Result<()> {
    use creatomate::ToJson as _;

    let options = build_options(args)?;
    print_json(&options.to_json())
}
