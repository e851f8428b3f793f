use clap::Parser;
use miette::Result;
use slicepage::cli::Cli;
use slicepage::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.convert.verbose);

    slicepage::cli::convert::run(cli.convert, &printer)?;

    Ok(())
}
