use stackwin_core::config;

/// Prints the configuration the manager would run with, after defaults
/// are filled in and values are clamped.
pub fn execute() {
    let config = config::load();

    match toml::to_string_pretty(&config) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: could not serialize config: {e}");
            std::process::exit(1);
        }
    }
}
