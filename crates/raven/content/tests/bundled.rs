//! The data files shipped with the crate must load.

use raven_content::ContentFactory;

#[test]
fn bundled_brain_config_loads() {
    let config = ContentFactory::bundled().load_brain_config().unwrap();
    assert_eq!(config.arbitration_interval_ticks, 15);
    assert!(config.randomize_biases.is_some());
}

#[test]
fn bundled_scenarios_load() {
    let factory = ContentFactory::bundled();
    for name in ["arena", "duel"] {
        let scenario = factory.load_scenario(name).unwrap();
        assert_eq!(scenario.name, name);
        assert!(!scenario.bots.is_empty());
        for bot in &scenario.bots {
            assert!(scenario.bounds.contains(bot.position), "{}", bot.name);
        }
    }
}

#[test]
fn unknown_scenario_is_an_error() {
    assert!(ContentFactory::bundled().load_scenario("nowhere").is_err());
}
