use std::path::Path;
use colored::{Color, Colorize};

pub struct Utils;

pub enum PrintOp {
    Create,
    Update,
}

impl Utils {
    /// `+ path` for new files, `~ path` for files that already existed.
    pub fn print_status(rel: &str, op: PrintOp) {
        match op {
            PrintOp::Create => println!("{}", format!("+ {}", rel).color(Color::Green)),
            PrintOp::Update => println!("{}", format!("~ {}", rel).color(Color::Yellow)),
        }
    }

    /// Pick the print op for a file that is about to be written.
    pub fn op_for(path: &Path) -> PrintOp {
        if path.exists() { PrintOp::Update } else { PrintOp::Create }
    }

    /// Show `path` relative to `base` when possible
    pub fn display_relative(path: &Path, base: &Path) -> String {
        path.strip_prefix(base)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
