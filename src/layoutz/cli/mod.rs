//! Rendering, styling, message printing, and the interactive shell for the
//! binary. Everything above this module returns data; everything in here
//! turns it into terminal output.

use colored::Colorize;

use crate::commands::{CmdMessage, MessageLevel};

pub mod render;
pub mod shell;
pub mod styles;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
