use std::io::Read;

use clap::{Parser, ValueEnum};

use mima::layout::{IdScheme, LayoutOptions, VerticalPolicy};

#[derive(Parser)]
#[command(name = "mima", about = "Turn a # outline into a positioned mind-map tree, as JSON")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<std::path::PathBuf>,

    /// Horizontal spacing between depths
    #[arg(long, short = 'x')]
    hspace: Option<f64>,

    /// Vertical spacing between siblings
    #[arg(long, short = 'y')]
    vspace: Option<f64>,

    /// Vertical placement policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Parent)]
    policy: PolicyArg,

    /// Node id scheme
    #[arg(long, value_enum, default_value_t = IdArg::Position)]
    ids: IdArg,

    /// Print compact JSON on one line
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Anchor children around their parent's y
    Parent,
    /// y from sibling index alone
    Index,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IdArg {
    /// node-<depth>-<k> ids
    Position,
    /// Label-derived slug ids
    Slug,
}

fn main() {
    let cli = Cli::parse();

    let input = match cli.file {
        Some(path) => std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("ERROR: failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("ERROR: failed to read stdin: {e}");
                std::process::exit(1);
            });
            buf
        }
    };

    let mut options = LayoutOptions::default();
    if let Some(x) = cli.hspace {
        options.horizontal_spacing = x;
    }
    if let Some(y) = cli.vspace {
        options.vertical_spacing = y;
    }
    options.vertical_policy = match cli.policy {
        PolicyArg::Parent => VerticalPolicy::ParentAnchored,
        PolicyArg::Index => VerticalPolicy::SiblingIndex,
    };
    options.id_scheme = match cli.ids {
        IdArg::Position => IdScheme::Positional,
        IdArg::Slug => IdScheme::Slug,
    };

    let tree = mima::mind_map_with_options(&input, &options);

    let json = if cli.compact {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    match json {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("ERROR: failed to serialize tree: {e}");
            std::process::exit(1);
        }
    }
}
