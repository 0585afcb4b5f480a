use tracing::debug;

use crate::config::ShipConfig;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::ConsoleResult;
use crate::models::firing_mode::FiringMode;
use crate::models::ship::Ship;
use crate::models::torpedo_store::PhotonTorpedoStore;
use crate::ui::presenters::FiringPresenter;

/// Interactive fire-control console for a ship built from photon stores.
pub struct Console {
    pub ship: Ship<PhotonTorpedoStore, PhotonTorpedoStore>,
}

impl Console {
    pub fn new(config: &ShipConfig) -> Self {
        Console {
            ship: Ship::from_config(config),
        }
    }

    /// Read and execute commands until `q` or end of input.
    pub fn run(&mut self, io: &mut dyn InputReader, output: &mut dyn OutputWriter) -> ConsoleResult<()> {
        output.writeln("*** GT4500 FIRE CONTROL ***");
        FiringPresenter::show_status(&self.ship, output);

        while let Some(line) = io.read_line("COMMAND")? {
            let input = line.trim();
            debug!(target: "gt4500.console", command = input, "command received");

            match input.to_ascii_lowercase().as_str() {
                "" => continue,
                "1" | "single" | "ft" => self.fire(FiringMode::Single, output),
                "2" | "all" | "fa" => self.fire(FiringMode::All, output),
                "3" | "status" => FiringPresenter::show_status(&self.ship, output),
                "q" | "quit" => {
                    output.writeln("FIRE CONTROL OFFLINE.");
                    return Ok(());
                }
                _ => Self::print_command_menu(output),
            }
        }
        Ok(())
    }

    fn fire(&mut self, mode: FiringMode, output: &mut dyn OutputWriter) {
        let success = self.ship.fire_torpedo(mode);
        FiringPresenter::show_fire_result(mode, success, output);
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   1 = FIRE SINGLE TORPEDO");
        output.writeln("   2 = FIRE ALL STORES");
        output.writeln("   3 = TORPEDO STATUS");
        output.writeln("   Q = QUIT");
    }
}
