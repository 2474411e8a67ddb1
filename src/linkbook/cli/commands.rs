//! # CLI Layer
//!
//! The CLI is **one possible UI client** for linkbook and the only place that
//! knows about terminal I/O. It:
//!
//! 1. Parses arguments with clap (`setup.rs`)
//! 2. Sets up logging and the `AppContext` (data dir, config, API)
//! 3. Bootstraps both documents (except for `init`, which reports what it creates)
//! 4. Prompts for anything `add` was not given (`prompt.rs`)
//! 5. Calls the `LinkbookApi` and renders the `CmdResult` (`render.rs`)
//!
//! Errors are returned to `main.rs`, which prints them and exits non-zero.

use super::prompt::{ask, choose_or_enter, confirm};
use super::render::{print_messages, render_links, render_names, render_notes, render_tree};
use super::setup::{Cli, Commands, NoteCommands};
use super::styles::names;
use clap::Parser;
use linkbook::api::{CmdMessage, CmdResult, ConfigAction, LinkbookApi};
use linkbook::commands::browse::EMPTY_TREE_MESSAGE;
use linkbook::error::{LinkbookError, Result};
use linkbook::init::initialize;
use linkbook::store::fs_backend::FsBackend;
use std::io::{self, BufRead, Write};

struct AppContext {
    api: LinkbookApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli, bootstraps(&cli.command))?;

    match cli.command {
        Some(Commands::Add {
            main,
            sub,
            author,
            link,
        }) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            handle_add(&ctx, &mut input, &mut output, main, sub, author, link)
        }
        Some(Commands::Mains) => handle_mains(&ctx),
        Some(Commands::Subs { main }) => handle_subs(&ctx, &main),
        Some(Commands::Authors { main, sub }) => handle_authors(&ctx, &main, &sub),
        Some(Commands::Links { main, sub, author }) => handle_links(&ctx, &main, &sub, &author),
        Some(Commands::Tree) => handle_tree(&ctx),
        Some(Commands::RmAuthor {
            main,
            sub,
            author,
            yes,
        }) => handle_rm_author(&ctx, &main, &sub, &author, yes),
        Some(Commands::Note { action }) => match action {
            NoteCommands::Add { text } => handle_note_add(&ctx, &text.join(" ")),
            NoteCommands::List => handle_note_list(&ctx),
            NoteCommands::Rm { number } => handle_note_rm(&ctx, number),
        },
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_overview(&ctx),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG still wins when set
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

/// Every command but `init` creates missing documents quietly up front.
fn bootstraps(command: &Option<Commands>) -> bool {
    !matches!(command, Some(Commands::Init))
}

fn init_context(cli: &Cli, bootstrap: bool) -> Result<AppContext> {
    let ctx = initialize(cli.data_dir.clone())?;

    if bootstrap {
        let result = ctx.api.init()?;
        for doc in &result.created_documents {
            log::info!("bootstrapped {} document", doc);
        }
    }

    Ok(AppContext { api: ctx.api })
}

/// Children of a level that may not exist yet. Any other failure is fatal.
fn names_or_empty(result: Result<CmdResult>) -> Result<Vec<String>> {
    match result {
        Ok(result) => Ok(result.names),
        Err(LinkbookError::NotFound(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_add<R: BufRead, W: Write>(
    ctx: &AppContext,
    input: &mut R,
    output: &mut W,
    main: Option<String>,
    sub: Option<String>,
    author: Option<String>,
    link: Option<String>,
) -> Result<()> {
    let main = match main {
        Some(main) => main,
        None => {
            let existing = ctx.api.list_mains()?.names;
            choose_or_enter(input, output, "Main category", &existing)?
        }
    };
    let sub = match sub {
        Some(sub) => sub,
        None => {
            // A new main has no subs yet
            let existing = names_or_empty(ctx.api.list_subs(&main))?;
            choose_or_enter(input, output, "Sub category", &existing)?
        }
    };
    let author = match author {
        Some(author) => author,
        None => {
            let existing = names_or_empty(ctx.api.list_authors(&main, &sub))?;
            choose_or_enter(input, output, "Author", &existing)?
        }
    };
    let link = match link {
        Some(link) => link,
        None => ask(input, output, "Link")?,
    };

    let result = ctx.api.add_link(&main, &sub, &author, &link)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mains(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_mains()?;
    if result.names.is_empty() {
        print_messages(&result.messages);
        return Ok(());
    }
    print!("{}", render_names("", &result.names, names::MAIN, ""));
    Ok(())
}

fn handle_subs(ctx: &AppContext, main: &str) -> Result<()> {
    let result = ctx.api.list_subs(main)?;
    print!("{}", render_names("", &result.names, names::SUB, ""));
    Ok(())
}

fn handle_authors(ctx: &AppContext, main: &str, sub: &str) -> Result<()> {
    let result = ctx.api.list_authors(main, sub)?;
    print!("{}", render_names("", &result.names, names::AUTHOR, ""));
    Ok(())
}

fn handle_links(ctx: &AppContext, main: &str, sub: &str, author: &str) -> Result<()> {
    let result = ctx.api.get_links(main, sub, author)?;
    print!("{}", render_links(main, sub, author, &result.links));
    Ok(())
}

fn handle_tree(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tree()?;
    if let Some(tree) = &result.tree {
        print!("{}", render_tree(tree));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_rm_author(ctx: &AppContext, main: &str, sub: &str, author: &str, yes: bool) -> Result<()> {
    // Resolve first so a bad path fails before we ask anything
    let links = ctx.api.get_links(main, sub, author)?.links;

    if !yes {
        let question = format!(
            "Delete author '{}' and {} link(s) under {} / {}?",
            author.trim(),
            links.len(),
            main.trim(),
            sub.trim()
        );
        let stdin = io::stdin();
        let confirmed = confirm(&mut stdin.lock(), &mut io::stdout(), &question)?;
        if !confirmed {
            print_messages(&[CmdMessage::info("Operation cancelled.")]);
            return Ok(());
        }
    }

    let result = ctx.api.delete_author(main, sub, author)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_add(ctx: &AppContext, text: &str) -> Result<()> {
    let result = ctx.api.add_note(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_note_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print!("{}", render_notes(&result.notes));
    Ok(())
}

/// `number` is the 1-based position shown by `note list`.
fn handle_note_rm(ctx: &AppContext, number: usize) -> Result<()> {
    if number == 0 {
        return Err(LinkbookError::Api("Note numbers start at 1".to_string()));
    }
    let result = match ctx.api.delete_note(number - 1) {
        Err(LinkbookError::IndexOutOfRange { len, .. }) => {
            return Err(LinkbookError::Api(format!(
                "No note number {} (there are {} notes)",
                number, len
            )))
        }
        other => other?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    let paths = ctx.api.paths();
    print_messages(&result.messages);
    println!("Data directory: {}", paths.data_dir.display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Naked `linkbook`: main categories and notes at a glance.
fn handle_overview(ctx: &AppContext) -> Result<()> {
    let mains = ctx.api.list_mains()?;
    let notes = ctx.api.list_notes()?;

    print!(
        "{}",
        render_names(
            "Main categories",
            &mains.names,
            names::MAIN,
            EMPTY_TREE_MESSAGE
        )
    );
    println!();
    println!("Notes");
    print!("{}", render_notes(&notes.notes));
    Ok(())
}
