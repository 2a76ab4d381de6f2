use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use parser_registry::{Pair, ParserRegistry, TypeFamily, TypeToken, Typed, init_tracing};

/// Resolve a type's parser and run it over a value
#[derive(ClapParser)]
#[command(name = "parser-registry", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the type families with a registered parser
    Types,
    /// Parse INPUT as a value of TYPE and print it as JSON
    Parse {
        #[arg(value_enum)]
        r#type: TypeName,
        input: String,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeName {
    String,
    Bool,
    Integer,
    Float,
    /// A pair of strings
    Pair,
    /// A subtype of a pair of strings, e.g. `user,password`
    Credentials,
    /// The universal root type
    Object,
}

/// Subtype of `Pair<String, String>` with no parser of its own
struct Credentials;

impl Typed for Credentials {
    fn type_token() -> TypeToken {
        TypeToken::extending(
            TypeFamily::named("credentials"),
            TypeToken::of::<Pair<String, String>>(),
        )
    }
}

impl TypeName {
    fn token(self) -> TypeToken {
        match self {
            Self::String => TypeToken::of::<String>(),
            Self::Bool => TypeToken::of::<bool>(),
            Self::Integer => TypeToken::of::<i64>(),
            Self::Float => TypeToken::of::<f64>(),
            Self::Pair => TypeToken::of::<Pair<String, String>>(),
            Self::Credentials => TypeToken::of::<Credentials>(),
            Self::Object => TypeToken::object(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let registry = ParserRegistry::with_defaults();

    match cli.command {
        Command::Types => {
            for family in registry.registered_families() {
                println!("{}", family);
            }
        }
        Command::Parse {
            r#type,
            input,
            pretty,
        } => {
            let token = r#type.token();
            let value = registry
                .parse(&token, &input)
                .with_context(|| format!("Failed to parse {:?} as `{}`", input, token))?;

            let json = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            }
            .context("Failed to serialize parsed value")?;
            println!("{}", json);
        }
    }

    Ok(())
}
