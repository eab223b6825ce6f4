use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use songbook::api::{ContentsQuery, Order};
use songbook::util::{self, PageLocation};
use songbook::{HomepageConfig, HomepageRenderer, HtmlDocument, HtmlMode, DEFAULT_BASE_URL};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "songbook-cli")]
#[command(about = "CLI for songbook - ponzu homepage renderer and admin helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for Order {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the song list and render the homepage
    Homepage {
        /// Site root (can also be set via SONGBOOK_BASE_URL env var)
        #[arg(long, env = "SONGBOOK_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// HTML page to render into; prints the bare fragment when omitted
        #[arg(short, long)]
        page: Option<PathBuf>,

        /// Id of the element to fill
        #[arg(long, default_value = "main")]
        element: String,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Content type to list
        #[arg(short, long, default_value = "Song")]
        r#type: String,

        /// Number of items, -1 for all
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i32>,

        /// Page index in multiples of count
        #[arg(long)]
        offset: Option<u32>,

        /// Sort order by timestamp
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        /// Insert song fields without HTML escaping
        #[arg(long)]
        raw_html: bool,

        /// Give up after this many seconds (can also be set via SONGBOOK_TIMEOUT_SECS)
        #[arg(long, env = "SONGBOOK_TIMEOUT_SECS")]
        timeout: Option<u64>,
    },
    /// Replace smart quotes, dashes and similar characters
    Clean {
        /// Text to clean; read from stdin when omitted
        text: Option<String>,
    },
    /// Print the local time of a unix millisecond timestamp
    Time {
        #[arg(allow_negative_numbers = true)]
        millis: i64,

        /// Print the 12-hour record as JSON
        #[arg(long)]
        twelve_hour: bool,
    },
    /// Print the local date of a unix millisecond timestamp
    Date {
        #[arg(allow_negative_numbers = true)]
        millis: i64,

        /// Print the date record as JSON
        #[arg(long)]
        record: bool,
    },
    /// Look up a query-string parameter of a page URL
    Param {
        /// Full page URL
        url: String,

        /// Parameter name
        name: String,

        /// Percent-decode the value
        #[arg(long)]
        decode: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("songbook=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Homepage {
            base_url,
            page,
            element,
            output,
            r#type,
            count,
            offset,
            order,
            raw_html,
            timeout,
        } => {
            let mut query = ContentsQuery::new(r#type);
            query.count = count;
            query.offset = offset;
            query.order = order.map(Order::from);

            let mut config = HomepageConfig::new(base_url).with_query(query);
            if let Some(secs) = timeout {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            if raw_html {
                config = config.with_html_mode(HtmlMode::Raw);
            }
            let renderer = HomepageRenderer::new(config)?;

            let rendered = match page {
                Some(path) => {
                    let template = std::fs::read_to_string(&path)?;
                    let mut doc = HtmlDocument::with_target(template, element);
                    if let Err(e) = renderer.load(&mut doc).await {
                        error!("Could not render {}: {}", path.display(), e);
                        return Err(e.into());
                    }
                    doc.into_string()
                }
                None => {
                    let mut fragment = String::new();
                    if let Err(e) = renderer.load(&mut fragment).await {
                        error!("Could not render homepage: {}", e);
                        return Err(e.into());
                    }
                    fragment
                }
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("✅ Wrote {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }
        Commands::Clean { text } => {
            let text = match text {
                Some(t) => t,
                None => std::io::read_to_string(std::io::stdin())?,
            };
            print!("{}", util::replace_bad_chars(&text));
        }
        Commands::Time {
            millis,
            twelve_hour,
        } => {
            if twelve_hour {
                let record = util::partial_time_record(millis);
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!("{}", util::partial_time(millis));
            }
        }
        Commands::Date { millis, record } => {
            if record {
                let record = util::partial_date_record(millis);
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!("{}", util::partial_date(millis));
            }
        }
        Commands::Param { url, name, decode } => {
            let location = PageLocation::parse(&url)?;
            let value = if decode {
                location.param_decoded(&name)
            } else {
                location.param(&name)
            };
            println!("{}", value);
        }
    }

    Ok(())
}
