use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use layoutz::api::LayoutApi;
use layoutz::cli::{print_messages, render, shell};
use layoutz::commands::{CmdMessage, CmdResult};
use layoutz::config::LayoutzConfig;
use layoutz::error::{LayoutError, Result};
use layoutz::model::Document;
use layoutz::session::{Session, SessionOrigin};
use layoutz::store::fs::FileStore;
use layoutz::store::LayoutStore;
use layoutz::template;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    config: LayoutzConfig,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Edit { file, template }) => handle_edit(&ctx, file, template),
        Some(Commands::Show { file }) => handle_show(&ctx, file),
        Some(Commands::Preview { file, columns }) => handle_preview(&ctx, file, columns),
        Some(Commands::New { template, output }) => handle_new(&ctx, template, output),
        Some(Commands::Templates) => handle_templates(&ctx),
        Some(Commands::Validate { file }) => handle_validate(&ctx, file),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_edit(&ctx, None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let config_dir = match std::env::var_os("LAYOUTZ_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "layoutz", "layoutz")
            .expect("Could not determine config dir")
            .config_dir()
            .to_path_buf(),
    };
    let config = LayoutzConfig::load(&config_dir).unwrap_or_default();
    Ok(AppContext { config, config_dir })
}

fn file_store(ctx: &AppContext) -> FileStore {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    FileStore::new(cwd).with_pretty(ctx.config.pretty_export)
}

/// Build the session document: an imported file, a named template, or the
/// configured default template, in that order.
fn open_document(
    ctx: &AppContext,
    file: Option<&str>,
    template_name: Option<&str>,
) -> Result<(Document, SessionOrigin)> {
    if let Some(name) = file {
        let doc = file_store(ctx).load(name)?;
        return Ok((doc, SessionOrigin::File(PathBuf::from(name))));
    }
    let name = template_name.unwrap_or(&ctx.config.default_template);
    let doc = template::builtin(name)
        .ok_or_else(|| LayoutError::Api(format!("No built-in template '{}'", name)))?;
    Ok((doc, SessionOrigin::Template(name.to_lowercase())))
}

fn handle_edit(ctx: &AppContext, file: Option<String>, template: Option<String>) -> Result<()> {
    let (doc, origin) = open_document(ctx, file.as_deref(), template.as_deref())?;
    let session = Session::from_document(doc, origin);
    let mut api = LayoutApi::new(session, file_store(ctx));
    shell::run(&mut api, &ctx.config)
}

fn handle_show(ctx: &AppContext, file: Option<String>) -> Result<()> {
    let (doc, _) = open_document(ctx, file.as_deref(), None)?;
    print!("{}", render::render_design(&doc));
    Ok(())
}

fn handle_preview(ctx: &AppContext, file: Option<String>, columns: Option<usize>) -> Result<()> {
    let (doc, _) = open_document(ctx, file.as_deref(), None)?;
    let columns = columns.unwrap_or_else(|| ctx.config.preview_columns());
    print!("{}", render::render_preview(&doc, columns));
    Ok(())
}

fn handle_new(ctx: &AppContext, template_name: String, output: Option<String>) -> Result<()> {
    let doc = template::builtin(&template_name)
        .ok_or_else(|| LayoutError::Api(format!("No built-in template '{}'", template_name)))?;
    let dest = output.unwrap_or_else(|| format!("{}-layout", template_name.to_lowercase()));

    let mut store = file_store(ctx);
    let result = layoutz::commands::export::run(&mut store, &doc, Some(&dest))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_templates(ctx: &AppContext) -> Result<()> {
    for name in template::NAMES {
        let doc = template::builtin(name).expect("listed template exists");
        let marker = if name == ctx.config.default_template {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{} - {} section(s), {} field(s)",
            name,
            marker,
            doc.sections.len(),
            doc.field_count()
        );
    }
    Ok(())
}

fn handle_validate(ctx: &AppContext, file: String) -> Result<()> {
    let doc = file_store(ctx).load(&file)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} is a valid '{}' layout: {} section(s), {} field(s), {} hidden",
        file,
        doc.object_type,
        doc.sections.len(),
        doc.field_count(),
        doc.hidden_fields().len()
    )));
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.config.clone();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("preview-columns = {}", config.preview_columns);
            println!("pretty-export = {}", config.pretty_export);
            println!("default-template = {}", config.default_template);
        }
        (Some("preview-columns"), None) => println!("preview-columns = {}", config.preview_columns),
        (Some("pretty-export"), None) => println!("pretty-export = {}", config.pretty_export),
        (Some("default-template"), None) => {
            println!("default-template = {}", config.default_template)
        }
        (Some("preview-columns"), Some(v)) => {
            let columns: usize = v
                .parse()
                .map_err(|_| LayoutError::Api(format!("Not a column count: {}", v)))?;
            config.set_preview_columns(columns);
            config.save(&ctx.config_dir)?;
            println!("preview-columns = {}", config.preview_columns);
        }
        (Some("pretty-export"), Some(v)) => {
            let pretty: bool = v
                .parse()
                .map_err(|_| LayoutError::Api(format!("Expected true or false, got {}", v)))?;
            config.pretty_export = pretty;
            config.save(&ctx.config_dir)?;
            println!("pretty-export = {}", config.pretty_export);
        }
        (Some("default-template"), Some(v)) => {
            if template::builtin(&v).is_none() {
                return Err(LayoutError::Api(format!("No built-in template '{}'", v)));
            }
            config.default_template = v.to_lowercase();
            config.save(&ctx.config_dir)?;
            println!("default-template = {}", config.default_template);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}
