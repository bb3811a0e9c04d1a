use std::fs::{self, File};
use std::io::{self, Read};

use anyhow::Context;
use colored::Colorize;
use flatbox_local::{Container, Cursor, Item, LocalContainer, LocalItem, LocalLocation, Location};
use serde::Serialize;
use tracing::debug;

use crate::cli::*;
use crate::config::{config_map, resolve_root, ROOT_ENV};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let root = resolve_root(
        cli.root.as_deref(),
        cli.config.as_deref(),
        std::env::var(ROOT_ENV).ok(),
    )?;
    let location = LocalLocation::dial(&config_map(&root)?)
        .with_context(|| format!("opening location {}", root.display()))?;
    debug!(root = %location.root().display(), "location opened");

    let format = cli.format;
    match cli.command {
        Command::Containers(args) => cmd_containers(&location, args, &format),
        Command::Mkc(args) => cmd_mkc(&location, args, &format),
        Command::Rmc(args) => cmd_rmc(&location, args),
        Command::Ls(args) => cmd_ls(&location, args, &format),
        Command::Get(args) => cmd_get(&location, args),
        Command::Put(args) => cmd_put(&location, args, &format),
        Command::Rm(args) => cmd_rm(&location, args),
        Command::Stat(args) => cmd_stat(&location, args, &format),
        Command::Resolve(args) => cmd_resolve(&location, args, &format),
    }
}

#[derive(Serialize)]
struct ContainerView {
    id: String,
    name: String,
    url: String,
}

impl ContainerView {
    fn new(container: &LocalContainer) -> anyhow::Result<Self> {
        Ok(Self {
            id: container.id(),
            name: container.name(),
            url: container.url()?.to_string(),
        })
    }
}

#[derive(Serialize)]
struct ItemView {
    id: String,
    name: String,
    url: String,
    size: u64,
}

impl ItemView {
    fn new(item: &LocalItem) -> anyhow::Result<Self> {
        Ok(Self {
            id: item.id(),
            name: item.name(),
            url: item.url()?.to_string(),
            size: item.size()?,
        })
    }
}

#[derive(Serialize)]
struct ListingView {
    items: Vec<ItemView>,
    next_cursor: String,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn open_container(location: &LocalLocation, name: &str) -> anyhow::Result<LocalContainer> {
    location
        .container(name)
        .with_context(|| format!("opening container {name}"))
}

fn cmd_containers(
    location: &LocalLocation,
    args: ContainersArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let mut views = Vec::new();
    let mut cursor = Cursor::Start;
    loop {
        let page = location.containers(&args.prefix, &cursor, args.limit)?;
        for container in &page.items {
            views.push(ContainerView::new(container)?);
        }
        if page.is_last() {
            break;
        }
        cursor = page.next;
    }

    match format {
        OutputFormat::Json => print_json(&views),
        OutputFormat::Text => {
            if views.is_empty() {
                println!("No containers.");
            }
            for view in &views {
                println!("{}  {}", view.name.bold(), view.url.dimmed());
            }
            Ok(())
        }
    }
}

fn cmd_mkc(location: &LocalLocation, args: ContainerArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = location.create_container(&args.name)?;
    match format {
        OutputFormat::Json => print_json(&ContainerView::new(&container)?),
        OutputFormat::Text => {
            println!("{} Created container {}", "✓".green().bold(), container.name().bold());
            Ok(())
        }
    }
}

fn cmd_rmc(location: &LocalLocation, args: ContainerArgs) -> anyhow::Result<()> {
    location
        .remove_container(&args.name)
        .with_context(|| format!("removing container {}", args.name))?;
    println!("{} Removed container {}", "✓".green().bold(), args.name.bold());
    Ok(())
}

fn cmd_ls(location: &LocalLocation, args: LsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = open_container(location, &args.container)?;
    let mut cursor = Cursor::from_token(&args.cursor);
    let mut views = Vec::new();
    loop {
        let page = container.items(&args.prefix, &cursor, args.page_size, args.depth)?;
        for item in &page.items {
            views.push(ItemView::new(item)?);
        }
        cursor = page.next;
        if !args.all || cursor.is_end() {
            break;
        }
    }

    match format {
        OutputFormat::Json => print_json(&ListingView {
            items: views,
            next_cursor: cursor.token().to_string(),
        }),
        OutputFormat::Text => {
            for view in &views {
                println!("{:>10}  {}", view.size, view.name);
            }
            if !cursor.is_end() {
                println!("{} {}", "next cursor:".dimmed(), cursor.token().yellow());
            }
            Ok(())
        }
    }
}

fn cmd_get(location: &LocalLocation, args: GetArgs) -> anyhow::Result<()> {
    let container = open_container(location, &args.container)?;
    let item = container.item(&args.item)?;
    let mut reader = item.open()?;
    let copied = match &args.out {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            io::copy(&mut reader, &mut file)?
        }
        None => io::copy(&mut reader, &mut io::stdout().lock())?,
    };
    debug!(item = %item.id(), bytes = copied, "item read");
    Ok(())
}

fn cmd_put(location: &LocalLocation, args: PutArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = open_container(location, &args.container)?;
    let (mut reader, source_size): (Box<dyn Read>, Option<u64>) = match &args.file {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            let len = fs::metadata(path)?.len();
            (Box::new(file), Some(len))
        }
        None => (Box::new(io::stdin().lock()), None),
    };
    let size = args.size.or(source_size).unwrap_or(0);

    let item = container
        .put(&args.name, &mut reader, size)
        .with_context(|| format!("storing {}", args.name))?;
    match format {
        OutputFormat::Json => print_json(&ItemView::new(&item)?),
        OutputFormat::Text => {
            println!(
                "{} Stored {} ({} bytes)",
                "✓".green().bold(),
                item.name().bold(),
                item.size()?
            );
            Ok(())
        }
    }
}

fn cmd_rm(location: &LocalLocation, args: ItemArgs) -> anyhow::Result<()> {
    let container = open_container(location, &args.container)?;
    let item = container.item(&args.item)?;
    container.remove_item(&item.id())?;
    println!("{} Removed {}", "✓".green().bold(), item.name().bold());
    Ok(())
}

fn cmd_stat(location: &LocalLocation, args: ItemArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = open_container(location, &args.container)?;
    let item = container.item(&args.item)?;
    let meta = item.metadata()?;
    match format {
        OutputFormat::Json => print_json(&meta),
        OutputFormat::Text => {
            println!("{}", meta.name.bold());
            println!("  Path:     {}", meta.path);
            println!("  URL:      {}", item.url()?.to_string().blue());
            println!("  Size:     {}", meta.size);
            println!("  Modified: {}", meta.mod_time.to_rfc3339());
            println!("  ETag:     {}", item.etag()?.yellow());
            if let Some(mode) = &meta.mode {
                println!("  Mode:     {mode}");
            }
            Ok(())
        }
    }
}

fn cmd_resolve(location: &LocalLocation, args: UrlArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let item = location
        .item_by_url(&args.url)
        .with_context(|| format!("resolving {}", args.url))?;
    match format {
        OutputFormat::Json => print_json(&ItemView::new(&item)?),
        OutputFormat::Text => {
            println!("{}  {}", item.name().bold(), item.id().dimmed());
            Ok(())
        }
    }
}
