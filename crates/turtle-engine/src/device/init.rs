/// Surface and device options chosen before the window opens.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Use an sRGB surface so blending happens in linear space.
    pub prefer_srgb: bool,

    /// Wait for vertical blank. Off maps to the fastest mode the surface has.
    pub vsync: bool,

    /// Ignored when the surface does not support it.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Frames the CPU may queue ahead of the display. Backends treat it as a hint.
    pub max_frame_latency: u32,
}

impl GpuInit {
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            vsync: true,
            alpha_mode: None,
            max_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_vsynced_srgb() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode(), wgpu::PresentMode::AutoVsync);
    }

    #[test]
    fn vsync_off_selects_no_vsync_mode() {
        let init = GpuInit { vsync: false, ..GpuInit::default() };
        assert_eq!(init.present_mode(), wgpu::PresentMode::AutoNoVsync);
    }
}
