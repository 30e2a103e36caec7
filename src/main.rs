use clap::{Parser, Subcommand, ValueEnum};

use proxy_prefix::config::{load_from_env, resolve_prefix};
use proxy_prefix::observability::init_logging;
use proxy_prefix::prefix::{lint_prefix, PrefixConfig};
use proxy_prefix::Settings;

#[derive(Parser)]
#[command(name = "proxy-prefix")]
#[command(
    about = "Derive the router base and API request prefix from PROXY_PREFIX_PATH",
    long_about = None
)]
struct Cli {
    /// Raw prefix value; overrides PROXY_PREFIX_PATH
    #[arg(short, long)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the router base (trailing-slash form)
    RouterBase,
    /// Print the request prefix (no-trailing-slash form)
    RequestPrefix,
    /// Print all derived values
    Print {
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Lint the configured value; exits non-zero on findings
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    /// Shell-sourceable assignments for build scripts
    Env,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let settings = match cli.prefix {
        Some(prefix_path) => Settings { prefix_path },
        None => load_from_env(),
    };
    let prefix = resolve_prefix(&settings);

    match cli.command {
        Commands::RouterBase => println!("{}", prefix.router_base),
        Commands::RequestPrefix => println!("{}", prefix.request_prefix),
        Commands::Print { format } => print_prefix(&prefix, format)?,
        Commands::Check => {
            let lints = lint_prefix(&prefix.raw);
            if !lints.is_empty() {
                for lint in &lints {
                    eprintln!("warning: {lint}");
                }
                std::process::exit(1);
            }
            println!("ok: {:?} -> {}", prefix.raw, prefix.router_base);
        }
    }

    Ok(())
}

fn print_prefix(prefix: &PrefixConfig, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => {
            println!("router base:    {}", prefix.router_base);
            println!("request prefix: {}", prefix.request_prefix);
            println!("build base:     {}", prefix.build_base());
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&prefix)?);
        }
        Format::Env => {
            println!("ROUTER_BASE={}", prefix.router_base);
            println!("API_REQUEST_PREFIX={}", prefix.request_prefix);
            println!("BUILD_BASE={}", prefix.build_base());
        }
    }
    Ok(())
}
