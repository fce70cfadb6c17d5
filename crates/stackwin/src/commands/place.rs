use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use stackwin_core::{
    Hint, KeyStroke, StackedWindowManager, TerminalPosition, TerminalSize, Window, WindowManager,
    WindowRef, config,
};

#[derive(clap::Args)]
pub struct PlaceArgs {
    /// Screen size as COLSxROWS
    #[arg(long, default_value = "80x24", value_parser = parse_size)]
    pub screen: TerminalSize,
    /// Window to add, as COLSxROWS[:hint,...] with hints centered, cascade,
    /// no-resize or no-decorations (repeatable, bottom first)
    #[arg(long = "window", required = true, value_parser = parse_window)]
    pub windows: Vec<WindowSpec>,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// A window described on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub preferred: TerminalSize,
    pub hints: Vec<Hint>,
}

/// A window with fixed content that ignores input.
struct StaticWindow {
    preferred: TerminalSize,
    hints: Vec<Hint>,
}

impl Window for StaticWindow {
    fn preferred_size(&self) -> TerminalSize {
        self.preferred
    }

    fn hints(&self) -> &[Hint] {
        &self.hints
    }

    fn handle_input(&self, _key: &KeyStroke) -> bool {
        false
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Where one window ended up.
#[derive(Debug, Serialize)]
struct PlacedWindow {
    z: usize,
    hints: Vec<String>,
    top_left: TerminalPosition,
    size: TerminalSize,
}

pub fn execute(args: &PlaceArgs) {
    let config = config::load();
    stackwin_core::log::init(&config.logging);

    let manager = StackedWindowManager::from_config(&config);
    for spec in &args.windows {
        manager.add_window(&WindowRef::new(StaticWindow {
            preferred: spec.preferred,
            hints: spec.hints.clone(),
        }));
    }

    let placed = match place_all(manager.as_ref(), args.screen) {
        Ok(placed) => placed,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(screen = %args.screen, windows = placed.len(), "placed windows");

    if args.json {
        match serde_json::to_string_pretty(&placed) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: could not serialize placement: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_table(&placed);
    let active = placed.len().saturating_sub(1);
    println!("\n{} windows on a {} screen, active: #{active}", placed.len(), args.screen);
}

/// Asks the manager for each window's position, then its size at that
/// position, the same way a render loop would.
fn place_all(
    manager: &dyn WindowManager,
    screen: TerminalSize,
) -> stackwin_core::Result<Vec<PlacedWindow>> {
    manager
        .windows()
        .iter()
        .enumerate()
        .map(|(z, window)| {
            let top_left = manager.top_left_position(window, screen)?;
            let size = manager.size(window, Some(top_left), screen)?;
            Ok(PlacedWindow {
                z,
                hints: window.hints().iter().map(Hint::to_string).collect(),
                top_left,
                size,
            })
        })
        .collect()
}

fn print_table(placed: &[PlacedWindow]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Z"),
            Cell::new("Hints"),
            Cell::new("Column").set_alignment(CellAlignment::Right),
            Cell::new("Row").set_alignment(CellAlignment::Right),
            Cell::new("Size").set_alignment(CellAlignment::Right),
        ]);

    for window in placed {
        let hints = if window.hints.is_empty() {
            "-".to_string()
        } else {
            window.hints.join(", ")
        };
        table.add_row(vec![
            Cell::new(window.z),
            Cell::new(hints),
            Cell::new(window.top_left.column).set_alignment(CellAlignment::Right),
            Cell::new(window.top_left.row).set_alignment(CellAlignment::Right),
            Cell::new(window.size).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

fn parse_size(s: &str) -> Result<TerminalSize, String> {
    let (columns, rows) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected COLSxROWS, got '{s}'"))?;
    let columns: i32 = columns
        .trim()
        .parse()
        .map_err(|e| format!("invalid column count '{columns}': {e}"))?;
    let rows: i32 = rows
        .trim()
        .parse()
        .map_err(|e| format!("invalid row count '{rows}': {e}"))?;
    if columns < 0 || rows < 0 {
        return Err(format!("size must not be negative, got '{s}'"));
    }
    Ok(TerminalSize::new(columns, rows))
}

fn parse_window(s: &str) -> Result<WindowSpec, String> {
    let (size, hints) = match s.split_once(':') {
        Some((size, hints)) => (size, hints),
        None => (s, ""),
    };
    let hints = hints
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Hint::from_name(name).ok_or_else(|| format!("unknown hint '{name}'")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WindowSpec {
        preferred: parse_size(size)?,
        hints,
    })
}
