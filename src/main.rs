use bridgit::{config, App, Cli};
use clap::Parser;
use log::info;

fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();
    config::init_logging(&cli.log_file)?;
    color_eyre::install()?;
    info!("Starting bridgit");

    let mut app = App::new(&cli);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    result?;

    if cli.summary {
        println!("{}", app.summary_json()?);
    }
    Ok(())
}
