use crate::io::OutputWriter;
use crate::models::constants::StoreSlot;
use crate::models::firing_mode::FiringMode;
use crate::models::ship::Ship;
use crate::models::torpedo_store::PhotonTorpedoStore;

pub struct FiringPresenter;

impl FiringPresenter {
    pub fn show_fire_result(mode: FiringMode, success: bool, output: &mut dyn OutputWriter) {
        let outcome = if success { "TORPEDOES AWAY" } else { "FIRING FAILED" };
        output.writeln(&format!("{} FIRE: {}", mode.label(), outcome));
    }

    pub fn show_status(ship: &Ship<PhotonTorpedoStore, PhotonTorpedoStore>, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{:<12}{}", "STORE", "TORPEDOES"));
        for slot in StoreSlot::ALL.iter() {
            output.writeln(&format!("{:<12}{}", slot.name(), ship.torpedo_count(*slot)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShipConfig;
    use crate::io::test_utils::MockOutput;

    #[test]
    fn fire_result_reports_mode_and_outcome() {
        let mut output = MockOutput::new();
        FiringPresenter::show_fire_result(FiringMode::All, false, &mut output);
        assert_eq!(output.messages, vec!["ALL FIRE: FIRING FAILED\n"]);
    }

    #[test]
    fn status_lists_both_stores() {
        let config = ShipConfig {
            primary_torpedoes: 3,
            secondary_torpedoes: 0,
            ..ShipConfig::default()
        };
        let ship = Ship::from_config(&config);
        let mut output = MockOutput::new();

        FiringPresenter::show_status(&ship, &mut output);

        assert_eq!(output.messages.len(), 3);
        assert_eq!(output.messages[1], "PRIMARY     3\n");
        assert_eq!(output.messages[2], "SECONDARY   0\n");
    }
}
