//! The interactive design session.
//!
//! A thin line-command loop over [`LayoutApi`]: each command maps onto one
//! API call, output goes through the shared render/message helpers, and the
//! document lives only as long as the loop unless the user exports it.
//! Input comes from stdin line by line, so sessions can be piped in tests
//! and scripts.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::api::LayoutApi;
use crate::cli::{print_messages, render, styles};
use crate::config::LayoutzConfig;
use crate::document::Direction;
use crate::commands::FieldDraft;
use crate::error::Result;
use crate::model::FieldType;
use crate::store::LayoutStore;

const HELP: &str = "\
Layout commands:
  show                      design view (all fields, paths, markers)
  preview [columns]         what the page will look like
  hidden                    hidden-fields panel

Sections:
  add-section <title>       append a section
  rm-section <section>      delete a section and its fields
  move-section <section> <pos>   move to 1-based position

Fields (address by path like 2.3, or by label):
  add <section> <type> <label>   append a field (types: text email phone
                                 picklist date number currency textarea url)
  rm <field>...             delete permanently
  hide <field>...           hide (restorable)
  restore <field>...        bring a hidden field back
  up <field> / down <field> nudge within its section
  swap <a> <b>              exchange two fields' positions
  set <field> <value>       edit a value (validated by type)
  label <field> <text>      rename a field
  object <name>             rename the mocked object type

Session:
  export [file]             write the layout as JSON
  import <file>             replace the session from a file
  layouts                   list layout files already exported here
  quit                      end the session (unexported edits are lost)";

enum Flow {
    Continue,
    Quit,
}

pub fn run<S: LayoutStore>(api: &mut LayoutApi<S>, config: &LayoutzConfig) -> Result<()> {
    println!(
        "layoutz session from {} (type `help` for commands)\n",
        api.session().origin()
    );
    print!("{}", render::render_design(api.document()));

    let stdin = io::stdin();
    loop {
        print!("\n{} ", styles::PROMPT.apply_to("layoutz>"));
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                break;
            }
        }

        match dispatch(api, config, line.trim()) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    }

    if api.session().is_dirty() {
        println!(
            "{}",
            "Session ended with unexported changes; they are gone.".yellow()
        );
    }
    Ok(())
}

fn dispatch<S: LayoutStore>(
    api: &mut LayoutApi<S>,
    config: &LayoutzConfig,
    line: &str,
) -> Result<Flow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (cmd, args) = match tokens.split_first() {
        Some((cmd, args)) => (*cmd, args),
        None => return Ok(Flow::Continue),
    };

    match cmd {
        "help" | "?" => println!("{}", HELP),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),

        "show" | "ls" | "design" => print!("{}", render::render_design(api.document())),
        "preview" | "p" => {
            let columns = args
                .first()
                .and_then(|a| a.parse().ok())
                .unwrap_or_else(|| config.preview_columns());
            print!("{}", render::render_preview(api.document(), columns));
        }
        "hidden" => {
            let result = api.hidden()?;
            print!("{}", render::render_hidden(&result.listed));
            print_messages(&result.messages);
        }

        "add-section" => {
            let result = api.add_section(&args.join(" "))?;
            print_messages(&result.messages);
        }
        "rm-section" => {
            let result = api.remove_section(&args.join(" "))?;
            print_messages(&result.messages);
        }
        "move-section" => match args.split_last() {
            Some((pos, rest)) if !rest.is_empty() => {
                let position: usize = pos
                    .parse()
                    .map_err(|_| crate::error::LayoutError::Api("Usage: move-section <section> <pos>".into()))?;
                let result = api.move_section(&rest.join(" "), position)?;
                print_messages(&result.messages);
            }
            _ => println!("Usage: move-section <section> <pos>"),
        },

        "add" => {
            if args.len() < 3 {
                println!("Usage: add <section> <type> <label>");
            } else {
                let field_type: FieldType = args[1]
                    .parse()
                    .map_err(crate::error::LayoutError::Api)?;
                let label = args[2..].join(" ");
                let result = api.add_field(args[0], FieldDraft::new(label, field_type))?;
                print_messages(&result.messages);
            }
        }
        "rm" => {
            let result = api.remove_fields(args)?;
            print_messages(&result.messages);
        }
        "hide" => {
            let result = api.hide_fields(args)?;
            print_messages(&result.messages);
        }
        "restore" => {
            let result = api.restore_fields(args)?;
            print_messages(&result.messages);
        }
        "up" | "down" => {
            let direction = if cmd == "up" { Direction::Up } else { Direction::Down };
            match args.first() {
                Some(sel) => {
                    let result = api.move_field(sel, direction)?;
                    print_messages(&result.messages);
                }
                None => println!("Usage: {} <field>", cmd),
            }
        }
        "swap" => {
            if args.len() != 2 {
                println!("Usage: swap <a> <b>");
            } else {
                let result = api.swap_fields(args[0], args[1])?;
                print_messages(&result.messages);
            }
        }
        "set" => {
            if args.is_empty() {
                println!("Usage: set <field> <value>");
            } else {
                let result = api.set_value(args[0], &args[1..].join(" "))?;
                print_messages(&result.messages);
            }
        }
        "label" => {
            if args.len() < 2 {
                println!("Usage: label <field> <text>");
            } else {
                let result = api.set_label(args[0], &args[1..].join(" "))?;
                print_messages(&result.messages);
            }
        }
        "object" => {
            if args.is_empty() {
                println!("Usage: object <name>");
            } else {
                let result = api.rename_object(&args.join(" "))?;
                print_messages(&result.messages);
            }
        }

        "export" => {
            let result = api.export(args.first().copied())?;
            print_messages(&result.messages);
        }
        "layouts" => {
            let names = api.saved_layouts()?;
            if names.is_empty() {
                println!("No layout files here yet.");
            }
            for name in names {
                println!("  {}", name);
            }
        }
        "import" => match args.first() {
            Some(name) => {
                let result = api.import(name)?;
                print_messages(&result.messages);
                print!("{}", render::render_design(api.document()));
            }
            None => println!("Usage: import <file>"),
        },

        other => println!("Unknown command: {} (try `help`)", other),
    }
    Ok(Flow::Continue)
}
