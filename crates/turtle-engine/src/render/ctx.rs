use crate::coords::Viewport;
use crate::paint::Color;

/// Device handles a renderer needs while recording one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    /// Pipelines are built against this format and rebuilt when it changes.
    pub surface_format: wgpu::TextureFormat,
    /// Logical coordinate space of the frame.
    pub viewport: Viewport,
}

/// The frame's color attachment and the encoder recording into it.
pub struct RenderTarget<'a> {
    encoder: &'a mut wgpu::CommandEncoder,
    view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, view: &'a wgpu::TextureView) -> Self {
        Self { encoder, view }
    }

    /// Fills the whole attachment with `color`.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array().map(f64::from);
        self.pass("turtle clear", wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }));
    }

    /// Opens a pass that draws over what earlier passes left.
    pub fn load_pass(&mut self, label: &str) -> wgpu::RenderPass<'_> {
        self.pass(label, wgpu::LoadOp::Load)
    }

    fn pass(&mut self, label: &str, load: wgpu::LoadOp<wgpu::Color>) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}
