//! Board geometry and colour settings shared with the render layer.

use crate::error::ConfigError;

/// Pixel layout and palette of the board.
///
/// Pieces are `tile_size - piece_inset` pixels square and sit centred in
/// their tile. Adjustable from the front end via `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Edge of one square in pixels. Always a power of two.
    tile_size: u32,
    /// How much smaller a piece is than its tile.
    piece_inset: u32,
    /// Highlight for a legal drop target.
    legal_color: String,
    /// Highlight for an illegal drop target.
    illegal_color: String,
    light_color: String,
    dark_color: String,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            tile_size: 32,
            piece_inset: 8,
            legal_color: "#09c".to_string(),
            illegal_color: "#c60".to_string(),
            light_color: "lightgreen".to_string(),
            dark_color: "green".to_string(),
        }
    }
}

impl BoardGeometry {
    /// Smallest accepted tile size.
    pub const MIN_TILE: u32 = 8;
    /// Largest accepted tile size.
    pub const MAX_TILE: u32 = 256;

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[inline]
    pub fn piece_inset(&self) -> u32 {
        self.piece_inset
    }

    #[inline]
    pub fn legal_color(&self) -> &str {
        &self.legal_color
    }

    #[inline]
    pub fn illegal_color(&self) -> &str {
        &self.illegal_color
    }

    #[inline]
    pub fn light_color(&self) -> &str {
        &self.light_color
    }

    #[inline]
    pub fn dark_color(&self) -> &str {
        &self.dark_color
    }

    /// Change the tile size. The inset scales with it (a quarter of the tile).
    pub fn set_tile_size(&mut self, size: u32) -> Result<(), ConfigError> {
        if !size.is_power_of_two() || !(Self::MIN_TILE..=Self::MAX_TILE).contains(&size) {
            return Err(ConfigError::InvalidTileSize { size });
        }
        self.tile_size = size;
        self.piece_inset = size / 4;
        Ok(())
    }

    pub fn set_legal_color(&mut self, color: &str) -> Result<(), ConfigError> {
        self.legal_color = non_empty(color, "LegalColor")?;
        Ok(())
    }

    pub fn set_illegal_color(&mut self, color: &str) -> Result<(), ConfigError> {
        self.illegal_color = non_empty(color, "IllegalColor")?;
        Ok(())
    }
}

fn non_empty(value: &str, name: &'static str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyColor { name });
    }
    Ok(value.to_string())
}
