mod button;

pub use button::Button;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 8.0;
const BUTTONS_TOP: f32 = 330.0;

/// Button order, matched by `input::process_button_clicks`
pub const BUTTON_LABELS: &[&str] = &["Play/Pause", "Step", "Clear", "Random", "Save", "Load"];

/// Screen layout: the grid on the left, the control panel on the right
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub grid_width: i32,
    pub grid_height: i32,
}

impl Layout {
    pub fn new(cell_size: u32, grid_width: i32, grid_height: i32) -> Self {
        Self {
            cell_size: cell_size as f32,
            grid_width,
            grid_height,
        }
    }

    /// Width of the grid area in pixels
    pub fn grid_area_width(&self) -> f32 {
        self.grid_width as f32 * self.cell_size
    }

    /// Height of the grid area in pixels
    pub fn grid_area_height(&self) -> f32 {
        self.grid_height as f32 * self.cell_size
    }

    /// X position where the panel starts
    pub fn panel_x(&self) -> f32 {
        self.grid_area_width() + 10.0
    }

    /// Window size fitting the grid plus the panel
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.grid_area_width() + PANEL_WIDTH) as i32,
            (self.grid_area_height() as i32).max(BUTTONS_TOP as i32 + 240),
        )
    }

    /// Grid cell under a screen position, if the position is on the grid
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(i32, i32)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let x = (screen_x / self.cell_size) as i32;
        let y = (screen_y / self.cell_size) as i32;
        (x < self.grid_width && y < self.grid_height).then_some((x, y))
    }

    /// Top-left corner of a cell on screen
    pub fn cell_to_screen(&self, x: i32, y: i32) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }

    /// Create UI buttons stacked in the panel
    pub fn create_buttons(&self) -> Vec<Button> {
        let px = self.panel_x();
        let width = PANEL_WIDTH - 20.0;
        BUTTON_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let y = BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
                Button::new(px, y, width, BUTTON_HEIGHT, *label)
            })
            .collect()
    }
}
