pub mod convert;

use clap::Parser;

/// slicepage - rebuild a sliced layout as an HTML page
#[derive(Parser, Debug)]
#[command(name = "slicepage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}
