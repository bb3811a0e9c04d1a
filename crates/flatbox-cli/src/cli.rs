use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flatbox_types::Locator;

#[derive(Parser)]
#[command(
    name = "flatbox",
    about = "flatbox: flat, paginated access to directory-backed containers",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Location root directory (overrides --config and FLATBOX_ROOT)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// TOML file with a [location] table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List containers
    Containers(ContainersArgs),
    /// Create a container
    Mkc(ContainerArgs),
    /// Remove a container and everything in it
    Rmc(ContainerArgs),
    /// List items in a container
    Ls(LsArgs),
    /// Write an item's content to stdout or a file
    Get(GetArgs),
    /// Store a file (or stdin) as an item
    Put(PutArgs),
    /// Remove an item
    Rm(ItemArgs),
    /// Show an item's metadata
    Stat(ItemArgs),
    /// Find the item behind a file:// URL
    Resolve(UrlArgs),
}

#[derive(Args)]
pub struct ContainersArgs {
    #[arg(long, default_value = "")]
    pub prefix: String,
    /// Containers fetched per page
    #[arg(long, default_value = "100")]
    pub limit: usize,
}

#[derive(Args)]
pub struct ContainerArgs {
    pub name: String,
}

#[derive(Args)]
pub struct LsArgs {
    pub container: String,
    #[arg(long, default_value = "")]
    pub prefix: String,
    /// Levels below the prefix to reveal (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub depth: usize,
    #[arg(short = 'n', long, default_value = "100")]
    pub page_size: usize,
    /// Cursor returned by a previous listing
    #[arg(long, default_value = "")]
    pub cursor: String,
    /// Follow cursors until the listing is exhausted
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Args)]
pub struct GetArgs {
    pub container: String,
    pub item: String,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct PutArgs {
    pub container: String,
    pub name: String,
    /// Source file; stdin when omitted
    pub file: Option<PathBuf>,
    /// Expected byte count (defaults to the source file's size)
    #[arg(long)]
    pub size: Option<u64>,
}

#[derive(Args)]
pub struct ItemArgs {
    pub container: String,
    pub item: String,
}

#[derive(Args)]
pub struct UrlArgs {
    pub url: Locator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_containers() {
        let cli = Cli::try_parse_from(["flatbox", "containers", "--prefix", "logs"]).unwrap();
        if let Command::Containers(args) = cli.command {
            assert_eq!(args.prefix, "logs");
            assert_eq!(args.limit, 100);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_ls_defaults() {
        let cli = Cli::try_parse_from(["flatbox", "ls", "photos"]).unwrap();
        if let Command::Ls(args) = cli.command {
            assert_eq!(args.container, "photos");
            assert_eq!(args.prefix, "");
            assert_eq!(args.depth, 0);
            assert_eq!(args.page_size, 100);
            assert_eq!(args.cursor, "");
            assert!(!args.all);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_ls_paging() {
        let cli = Cli::try_parse_from([
            "flatbox", "ls", "photos", "--prefix", "2024/", "--depth", "1", "-n", "5",
            "--cursor", "2024/b.jpg",
        ]).unwrap();
        if let Command::Ls(args) = cli.command {
            assert_eq!(args.prefix, "2024/");
            assert_eq!(args.depth, 1);
            assert_eq!(args.page_size, 5);
            assert_eq!(args.cursor, "2024/b.jpg");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_put_from_stdin() {
        let cli = Cli::try_parse_from(["flatbox", "put", "c", "a/b.txt", "--size", "12"]).unwrap();
        if let Command::Put(args) = cli.command {
            assert_eq!(args.name, "a/b.txt");
            assert!(args.file.is_none());
            assert_eq!(args.size, Some(12));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_get_out() {
        let cli = Cli::try_parse_from(["flatbox", "get", "c", "x.txt", "-o", "/tmp/x"]).unwrap();
        if let Command::Get(args) = cli.command {
            assert_eq!(args.out, Some(PathBuf::from("/tmp/x")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_root() {
        let cli = Cli::try_parse_from(["flatbox", "rm", "c", "x", "--root", "/srv"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv")));
        assert!(matches!(cli.command, Command::Rm(_)));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["flatbox", "--format", "json", "stat", "c", "x"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_resolve_url() {
        let cli = Cli::try_parse_from(["flatbox", "resolve", "file:///srv/c/a%20b.txt"]).unwrap();
        if let Command::Resolve(args) = cli.command {
            assert_eq!(args.url.scheme(), "file");
            assert_eq!(args.url.to_string(), "file:///srv/c/a%20b.txt");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn resolve_rejects_relative_url() {
        assert!(Cli::try_parse_from(["flatbox", "resolve", "c/a.txt"]).is_err());
    }
}
