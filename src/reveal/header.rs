/// Collapsing header image driven by nested-scroll deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderCollapse {
    app_bar_height_px: f32,
    offset_px: f32,
}

impl HeaderCollapse {
    pub fn new(app_bar_height_px: f32) -> Self {
        Self {
            app_bar_height_px: app_bar_height_px.max(0.0),
            offset_px: 0.0,
        }
    }

    /// Accumulate a vertical delta; negative values collapse the header.
    pub fn on_nested_scroll(&mut self, delta_px: f32) {
        if !delta_px.is_finite() {
            return;
        }
        self.offset_px = (self.offset_px + delta_px).clamp(-self.app_bar_height_px, 0.0);
    }

    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    /// Never below one pixel, so the image keeps a layout slot.
    pub fn height_px(&self) -> f32 {
        (self.app_bar_height_px + self.offset_px).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_down_to_one_pixel_and_back() {
        let mut header = HeaderCollapse::new(278.0);
        assert_eq!(header.height_px(), 278.0);

        header.on_nested_scroll(-100.0);
        assert_eq!(header.height_px(), 178.0);

        header.on_nested_scroll(-1_000.0);
        assert_eq!(header.offset_px(), -278.0);
        assert_eq!(header.height_px(), 1.0);

        header.on_nested_scroll(5_000.0);
        assert_eq!(header.offset_px(), 0.0);
        assert_eq!(header.height_px(), 278.0);

        header.on_nested_scroll(f32::NAN);
        assert_eq!(header.height_px(), 278.0);
    }
}
