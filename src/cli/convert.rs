//! Convert command implementation.
//!
//! Reads the manifest in an assets folder, renders the page, writes it next
//! to the images and opens it in the default browser.

use std::io;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{self, Settings};
use crate::error::Result;
use crate::launch;
use crate::output::{display_path, plural, Printer};
use crate::parser::DialectChoice;
use crate::pipeline;

/// Convert an exported assets folder into an HTML page
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Folder containing exported_assets_info.txt and the exported PNGs
    pub assets_folder: PathBuf,

    /// Manifest dialect (default: detect from content)
    #[arg(long, value_enum)]
    pub dialect: Option<DialectChoice>,

    /// File name of the generated page inside the assets folder
    #[arg(long, short)]
    pub output: Option<String>,

    /// Write the page without opening it in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Show per-asset resolution details
    #[arg(long, short)]
    pub verbose: bool,
}

/// Run the conversion, returning the path of the written page.
pub fn run(args: ConvertArgs, printer: &Printer) -> Result<PathBuf> {
    run_with_opener(args, printer, launch::open_in_viewer)
}

/// `run` with the viewer launch supplied by the caller.
pub fn run_with_opener<F>(args: ConvertArgs, printer: &Printer, opener: F) -> Result<PathBuf>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let folder = &args.assets_folder;

    // Report a wrong folder before complaining about its settings file
    discovery::locate_manifest(folder)?;
    let settings = effective_settings(&args)?;

    let page = pipeline::build_page(folder, settings.dialect, settings.title.as_deref(), printer)?;

    let buttons = page.assets.iter().filter(|a| a.is_button()).count();
    printer.info(
        "Rendered",
        &format!(
            "{} ({}) on a {}x{} canvas",
            plural(page.assets.len(), "asset", "assets"),
            plural(buttons, "button", "buttons"),
            page.canvas.width,
            page.canvas.height
        ),
    );

    let output = folder.join(&settings.output);
    launch::write_page(&output, &page.html)?;
    printer.status("Wrote", &display_path(&output));
    println!("{}", output.display());

    if settings.open {
        open_page(&output, opener, printer);
    }

    Ok(output)
}

/// Hand the written page to a viewer. A failed launch only warns; the page
/// is already on disk. Returns whether the launch succeeded.
pub fn open_page<F>(path: &Path, opener: F, printer: &Printer) -> bool
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    match opener(path) {
        Ok(()) => {
            printer.info("Opening", &display_path(path));
            true
        }
        Err(e) => {
            printer.warning("Warning", &format!("Could not open a browser: {}", e));
            false
        }
    }
}

/// slicepage.yaml with CLI flags layered on top.
fn effective_settings(args: &ConvertArgs) -> Result<Settings> {
    let mut settings = discovery::load_settings(&args.assets_folder)?;

    if let Some(dialect) = args.dialect {
        settings.dialect = dialect;
    }
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if args.no_open {
        settings.open = false;
    }

    settings.validate()?;
    Ok(settings)
}
