//! Shared types module - plain data passed between the shell crates
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from the scene logic, the terminal layer and the configuration loader
//! alike.
//!
//! # Grid Defaults
//!
//! The shell draws into a fixed-size character grid. When no presets file is
//! available the following values are used:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MINIMUM_COLUMNS` | 80 | Grid width, and the narrowest terminal that renders |
//! | `DEFAULT_MINIMUM_ROWS` | 40 | Grid height, and the shortest terminal that renders |
//! | `DEFAULT_REQUIRED_COLUMNS` | 60 | Narrowest terminal that still shows the size notice |
//! | `DEFAULT_REQUIRED_ROWS` | 30 | Shortest terminal that still shows the size notice |
//! | `DEFAULT_FRAMERATE` | 30 | Ticks per second |
//! | `DEFAULT_INPUT_QUEUE` | 4 | Pending input events kept between ticks |
//!
//! # Key Names
//!
//! Input events carry a symbolic key name (`"up"`, `"return"`, `"escape"`,
//! `"a"`, ...). Bindings in the save file refer to these names.
//!
//! # Examples
//!
//! ```
//! use termstage_types::{InputEvent, KeyBindings, Control, SceneId};
//!
//! let bindings = KeyBindings::default();
//! assert_eq!(bindings.control_for(&InputEvent::named("return")), Some(Control::Select));
//! assert_eq!(bindings.control_for(&InputEvent::named("x")), None);
//!
//! assert_eq!(SceneId::from_str("settings"), Some(SceneId::Settings));
//! assert_eq!(SceneId::Start.as_str(), "start");
//! ```

/// Default grid width in columns (80)
pub const DEFAULT_MINIMUM_COLUMNS: u16 = 80;

/// Default grid height in rows (40)
pub const DEFAULT_MINIMUM_ROWS: u16 = 40;

/// Default size below which not even the size notice is drawn (60 columns)
pub const DEFAULT_REQUIRED_COLUMNS: u16 = 60;

/// Default size below which not even the size notice is drawn (30 rows)
pub const DEFAULT_REQUIRED_ROWS: u16 = 30;

/// Default tick rate (30 ticks per second)
pub const DEFAULT_FRAMERATE: u32 = 30;

/// Default input queue capacity
pub const DEFAULT_INPUT_QUEUE: usize = 4;

/// Row where the title banner starts on the start scene
pub const TITLE_ROW: u16 = 5;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED_BRIGHT: Rgb = Rgb::new(255, 85, 85);
    pub const GREEN_BRIGHT: Rgb = Rgb::new(85, 255, 85);
    pub const YELLOW_BRIGHT: Rgb = Rgb::new(255, 255, 85);
    pub const CYAN_BRIGHT: Rgb = Rgb::new(85, 255, 255);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
///
/// `fg: None` leaves the terminal's default foreground in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle {
        fg: None,
        bold: false,
        dim: false,
    };

    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single grid cell: one display character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::PLAIN,
    };

    /// Right half of a double-width character. The terminal has already
    /// advanced past it, so it is never printed.
    pub const CONTINUATION: Cell = Cell {
        ch: '\0',
        style: CellStyle::PLAIN,
    };

    pub const fn is_continuation(&self) -> bool {
        self.ch == '\0'
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A decoded key press.
///
/// `name` is the symbolic key identity used by bindings; `raw` carries the
/// typed text for printable keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub name: String,
    pub raw: Option<String>,
    pub ctrl: bool,
}

impl InputEvent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: None,
            ctrl: false,
        }
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }
}

/// Event delivered by the terminal event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Input(InputEvent),
    Resize { columns: u16, rows: u16 },
}

/// Logical controls a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Exit,
    Up,
    Down,
    Select,
}

impl Control {
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::Exit => "exit",
            Control::Up => "up",
            Control::Down => "down",
            Control::Select => "select",
        }
    }
}

/// Symbolic key names bound to each [`Control`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub exit: String,
    pub up: String,
    pub down: String,
    pub select: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            exit: "escape".to_string(),
            up: "up".to_string(),
            down: "down".to_string(),
            select: "return".to_string(),
        }
    }
}

impl KeyBindings {
    /// Resolve an input event to the control it is bound to.
    ///
    /// Exit wins when the same key is bound twice.
    pub fn control_for(&self, event: &InputEvent) -> Option<Control> {
        let name = event.name.as_str();
        if name == self.exit {
            Some(Control::Exit)
        } else if name == self.up {
            Some(Control::Up)
        } else if name == self.down {
            Some(Control::Down)
        } else if name == self.select {
            Some(Control::Select)
        } else {
            None
        }
    }
}

/// Terminal size thresholds.
///
/// At `minimum_*` and above the grid renders; between `required_*` and
/// `minimum_*` a size notice is shown; below `required_*` nothing is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryLimits {
    pub minimum_columns: u16,
    pub minimum_rows: u16,
    pub required_columns: u16,
    pub required_rows: u16,
}

impl Default for GeometryLimits {
    fn default() -> Self {
        Self {
            minimum_columns: DEFAULT_MINIMUM_COLUMNS,
            minimum_rows: DEFAULT_MINIMUM_ROWS,
            required_columns: DEFAULT_REQUIRED_COLUMNS,
            required_rows: DEFAULT_REQUIRED_ROWS,
        }
    }
}

/// The closed set of scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Start,
    Settings,
    Test,
}

impl SceneId {
    /// Parse a scene tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use termstage_types::SceneId;
    ///
    /// assert_eq!(SceneId::from_str("start"), Some(SceneId::Start));
    /// assert_eq!(SceneId::from_str("test"), Some(SceneId::Test));
    /// assert_eq!(SceneId::from_str("credits"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(SceneId::Start),
            "settings" => Some(SceneId::Settings),
            "test" => Some(SceneId::Test),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneId::Start => "start",
            SceneId::Settings => "settings",
            SceneId::Test => "test",
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_constants() {
        let limits = GeometryLimits::default();
        assert_eq!(limits.minimum_columns, 80);
        assert_eq!(limits.minimum_rows, 40);
        assert_eq!(limits.required_columns, 60);
        assert_eq!(limits.required_rows, 30);
        assert!(limits.required_columns <= limits.minimum_columns);
    }

    #[test]
    fn bindings_resolve_each_control() {
        let b = KeyBindings::default();
        assert_eq!(b.control_for(&InputEvent::named("escape")), Some(Control::Exit));
        assert_eq!(b.control_for(&InputEvent::named("up")), Some(Control::Up));
        assert_eq!(b.control_for(&InputEvent::named("down")), Some(Control::Down));
        assert_eq!(b.control_for(&InputEvent::named("return")), Some(Control::Select));
        assert_eq!(b.control_for(&InputEvent::named("")), None);
    }

    #[test]
    fn exit_binding_takes_priority() {
        let b = KeyBindings {
            exit: "q".into(),
            up: "q".into(),
            down: "down".into(),
            select: "return".into(),
        };
        assert_eq!(b.control_for(&InputEvent::named("q")), Some(Control::Exit));
    }

    #[test]
    fn blank_cell_is_default() {
        assert_eq!(Cell::default(), Cell::BLANK);
        assert_eq!(Cell::BLANK.ch, ' ');
        assert_ne!(CellStyle::PLAIN.dim().into_cell(' '), Cell::BLANK);
        assert!(Cell::CONTINUATION.is_continuation());
        assert!(!Cell::BLANK.is_continuation());
    }

    #[test]
    fn scene_tags_round_trip() {
        for id in [SceneId::Start, SceneId::Settings, SceneId::Test] {
            assert_eq!(SceneId::from_str(id.as_str()), Some(id));
        }
    }
}
