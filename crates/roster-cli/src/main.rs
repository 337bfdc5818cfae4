use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as Cli};
use roster_cli::{execute, init_tracing, Command, Context, RosterConfig, StdinConfirm};
use roster_core::ViewKind;
use roster_store::{AutoConfirm, Confirm, Dashboard, FileSlot, RosterStore};
use std::path::PathBuf;

fn cli() -> Cli {
    Cli::new("roster")
        .version(roster_cli::VERSION)
        .about("Hospital workforce roster dashboard")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Path to roster.toml"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the persisted roster"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .subcommand(Cli::new("list").about("Show every category"))
        .subcommand(Cli::new("summary").about("Show headline statistics"))
        .subcommand(Cli::new("breakdown").about("Show the medical / administrative / other mix"))
        .subcommand(
            Cli::new("chart").about("Occupied vs vacant bars").arg(
                Arg::new("top")
                    .long("top")
                    .value_parser(value_parser!(usize))
                    .help("Only the first N categories"),
            ),
        )
        .subcommand(
            Cli::new("view").about("Render a dashboard page").arg(
                Arg::new("name")
                    .required(true)
                    .value_parser(value_parser!(ViewKind))
                    .help("overview, workforce, gaps or recommendations"),
            ),
        )
        .subcommand(
            Cli::new("add")
                .about("Add a category")
                .arg(Arg::new("name").long("name").required(true).help("Category name"))
                .arg(Arg::new("occupied").long("occupied").help("Occupied positions"))
                .arg(Arg::new("vacant").long("vacant").help("Vacant positions"))
                .arg(Arg::new("color").long("color").help("Display color")),
        )
        .subcommand(
            Cli::new("update")
                .about("Edit a category")
                .arg(Arg::new("original").required(true).help("Current category name"))
                .arg(Arg::new("name").long("name").help("New name"))
                .arg(Arg::new("occupied").long("occupied").help("Occupied positions"))
                .arg(Arg::new("vacant").long("vacant").help("Vacant positions"))
                .arg(Arg::new("color").long("color").help("Display color")),
        )
        .subcommand(
            Cli::new("remove")
                .about("Delete a category")
                .arg(Arg::new("name").required(true).help("Category name"))
                .arg(yes_flag()),
        )
        .subcommand(
            Cli::new("reset")
                .about("Restore the default roster")
                .arg(yes_flag()),
        )
        .subcommand(Cli::new("report").about("Request the AI strategic report"))
}

fn yes_flag() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

fn text(args: &ArgMatches, id: &str) -> Option<String> {
    args.get_one::<String>(id).cloned()
}

fn parse_command(matches: &ArgMatches) -> anyhow::Result<(Command, bool)> {
    let (name, args) = matches
        .subcommand()
        .context("a subcommand is required")?;

    let command = match name {
        "list" => Command::List,
        "summary" => Command::Summary,
        "breakdown" => Command::Breakdown,
        "chart" => Command::Chart {
            top: args.get_one::<usize>("top").copied(),
        },
        "view" => Command::View(
            args.get_one::<ViewKind>("name")
                .copied()
                .unwrap_or_default(),
        ),
        "add" => Command::Add {
            name: text(args, "name").unwrap_or_default(),
            occupied: text(args, "occupied"),
            vacant: text(args, "vacant"),
            color: text(args, "color"),
        },
        "update" => Command::Update {
            original: text(args, "original").unwrap_or_default(),
            name: text(args, "name"),
            occupied: text(args, "occupied"),
            vacant: text(args, "vacant"),
            color: text(args, "color"),
        },
        "remove" => Command::Remove {
            name: text(args, "name").unwrap_or_default(),
        },
        "reset" => Command::Reset,
        "report" => Command::Report,
        other => anyhow::bail!("unknown command: {other}"),
    };

    let skip_prompt = args.try_get_one::<bool>("yes").ok().flatten().copied().unwrap_or(false);
    Ok((command, skip_prompt))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = cli().get_matches();
    let (command, skip_prompt) = parse_command(&matches)?;

    let mut config = RosterConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }
    tracing::debug!(data_dir = %config.storage.data_dir.display(), "configuration loaded");

    let slot = FileSlot::new(&config.storage.data_dir, &config.storage.key);
    let mut dashboard = Dashboard::open(RosterStore::new(slot));

    let ctx = Context {
        config,
        json: matches.get_flag("json"),
    };
    let confirm: Box<dyn Confirm> = if skip_prompt {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(StdinConfirm)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut dashboard, command, &ctx, confirm.as_ref(), &mut out).await
}
