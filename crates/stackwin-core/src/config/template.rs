/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `stackwin init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# stackwin configuration
# Location: ~/.config/stackwin/config.toml

[cascade]
# Cell where the first cascaded window opens.
origin_column = 2
origin_row = 1
# How far each following cascaded window is shifted right and down.
shift_right = 2
shift_down = 1

[logging]
# Enable file logging to ~/.config/stackwin/logs/stackwin.log.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
