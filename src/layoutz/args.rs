use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "layoutz")]
#[command(about = "Mock CRM record-page layouts: hide, reorder, swap, export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open an interactive design session
    #[command(alias = "e")]
    Edit {
        /// Layout file to start from (defaults to the configured template)
        file: Option<String>,

        /// Start from a built-in template instead of a file
        #[arg(short, long, conflicts_with = "file")]
        template: Option<String>,
    },

    /// Render the design view of a layout (all fields, paths, markers)
    Show {
        /// Layout file (defaults to the configured template)
        file: Option<String>,
    },

    /// Render the preview: visible fields only, formatted values
    #[command(alias = "p")]
    Preview {
        /// Layout file (defaults to the configured template)
        file: Option<String>,

        /// Grid columns
        #[arg(short, long)]
        columns: Option<usize>,
    },

    /// Write a fresh layout file from a built-in template
    New {
        /// Template name (see `layoutz templates`)
        template: String,

        /// Output file (defaults to <template>-layout.json)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List built-in templates
    Templates,

    /// Check a layout file against the schema and ordering invariants
    Validate { file: String },

    /// Get or set configuration
    Config {
        /// Configuration key (preview-columns, pretty-export, default-template)
        key: Option<String>,

        /// Value to set (if omitted, prints the current value)
        value: Option<String>,
    },
}
