use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;
use log::info;

use crate::audio::RodioDevice;
use crate::catalog::Catalog;
use crate::command::Session;
use crate::library::FolderImporter;
use crate::playback::{PlaybackController, PlaybackDevice, SilentDevice};

mod cli;
mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Args::parse();
    logging::init();

    let mut settings = settings::load_settings(args.config.clone());
    args.apply(&mut settings);
    log::set_max_level(settings.log.level_filter());

    if args.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let importer = FolderImporter::new(settings.library.clone());
    let catalog = Catalog::load(
        &importer,
        Path::new(&settings.library.folder),
        &settings.library.extension,
    );
    println!("Music library loaded. {} tracks.", catalog.len());
    println!();

    let device: Box<dyn PlaybackDevice> = if settings.audio.enabled {
        Box::new(RodioDevice::new())
    } else {
        info!("audio output disabled");
        Box::new(SilentDevice)
    };
    let mut session = Session::new(
        catalog,
        PlaybackController::new(device),
        settings.display.clone(),
    );

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let run_result = event_loop::run(stdin.lock(), io::stdout().lock(), &mut session, interactive);

    session.player.stop();
    run_result?;
    Ok(())
}
