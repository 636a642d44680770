use std::error::Error;
use std::io::{self, BufWriter};

use tracing::{error, info};

use trmandelbrot::cli::{CliAction, VERSION, help_text, parse_args};
use trmandelbrot::logging::init_logging;
use trmandelbrot::{
    Config, CrosstermEvents, ExplorerController, ExplorerOptions, KeyMap, TerminalPresenter,
    TerminalSession, ViewportMapper, run_event_loop,
};

fn main() -> Result<(), Box<dyn Error>> {
    let options = match parse_args(std::env::args().skip(1))? {
        CliAction::Help => {
            print!("{}", help_text());
            return Ok(());
        }
        CliAction::Version => {
            println!("trmandelbrot {}", VERSION);
            return Ok(());
        }
        CliAction::Run(options) => options,
    };

    let mut config = match options.config_path.clone().or_else(Config::default_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    options.apply(&mut config);
    config.validate()?;

    let log_path = init_logging(&config.log)?;
    info!(
        version = VERSION,
        ?log_path,
        grid_size = config.plot.grid_size,
        max_iterations = config.plot.max_iterations,
        zoom_policy = config.plot.zoom_policy.display_name(),
        colour_map = config.plot.colour_map_kind.display_name(),
        parallel = config.engine.parallel,
        cache = ?config.engine.cache_policy(),
        "trmandelbrot starting"
    );

    let mapper = ViewportMapper::from_config(&config.plot)?;
    let explorer_options = ExplorerOptions {
        colour_map_kind: config.plot.colour_map_kind,
        show_escape: config.display.show_escape,
        parallel: config.engine.parallel,
        cache_policy: config.engine.cache_policy(),
    };
    let presenter = TerminalPresenter::new(BufWriter::new(io::stdout()), config.display.cell_width);
    let mut controller = ExplorerController::new(mapper, explorer_options, presenter);
    let keymap = KeyMap::new(&config.controls);

    let mut session = TerminalSession::enter()?;
    let result = run_event_loop(&mut controller, &keymap, &mut CrosstermEvents);
    session.leave()?;

    if let Err(err) = &result {
        error!(error = %err, "session ended with an error");
    }
    result?;

    info!("trmandelbrot finished");
    Ok(())
}
