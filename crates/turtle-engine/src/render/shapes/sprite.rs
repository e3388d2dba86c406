use crate::assets::ImageData;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    create_viewport_ubo, quad_vertices, upload_image, warn_missing_once,
    write_viewport_ubo, TexturedPipeline, TexturedVertex, VertexBuffer,
};

/// Renderer for `DrawCmd::Sprite`.
///
/// Owns one image for its whole lifetime. The texture is uploaded on first
/// use; every sprite command draws that texture as a rotated quad.
pub struct SpriteRenderer {
    image: ImageData,

    pipeline: Option<TexturedPipeline>,
    texture_view: Option<wgpu::TextureView>,
    viewport_ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,

    vertices: Vec<TexturedVertex>,
    vbo: VertexBuffer<TexturedVertex>,

    warned_missing: bool,
}

impl SpriteRenderer {
    pub fn new(image: ImageData) -> Self {
        Self {
            image,
            pipeline: None,
            texture_view: None,
            viewport_ubo: None,
            bind_group: None,
            vertices: Vec::new(),
            vbo: VertexBuffer::new("turtle sprite vbo"),
            warned_missing: false,
        }
    }

    /// Renders all `DrawCmd::Sprite` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        self.vertices.clear();
        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Sprite(cmd) = &item.cmd else { continue };
            self.vertices.extend_from_slice(&quad_vertices(cmd.corners()));
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_resources(ctx);

        let Some(ubo) = self.viewport_ubo.as_ref() else {
            warn_missing_once(&mut self.warned_missing, "SpriteRenderer", "viewport uniform");
            return;
        };
        write_viewport_ubo(ctx, ubo);

        let count = self.vertices.len() as u32;
        let Some(vbo) = self.vbo.upload(ctx, &self.vertices) else {
            warn_missing_once(&mut self.warned_missing, "SpriteRenderer", "vertex buffer");
            return;
        };

        let (Some(pipeline), Some(bind_group)) = (self.pipeline.as_ref(), self.bind_group.as_ref())
        else {
            warn_missing_once(&mut self.warned_missing, "SpriteRenderer", "pipeline or bind group");
            return;
        };

        let mut rpass = target.load_pass("turtle sprite pass");
        rpass.set_pipeline(&pipeline.pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..count, 0..1);
    }

    fn ensure_resources(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline.as_ref().map(|p| p.format) != Some(ctx.surface_format) {
            self.pipeline = Some(TexturedPipeline::new(
                ctx,
                "turtle sprite pipeline",
                wgpu::FilterMode::Linear,
            ));
            self.bind_group = None;
        }

        if self.texture_view.is_none() && !self.image.is_empty() {
            // Image bytes are sRGB-encoded; the sRGB format decodes on sampling.
            let texture = upload_image(
                ctx,
                "turtle sprite texture",
                &self.image,
                wgpu::TextureFormat::Rgba8UnormSrgb,
            );
            self.texture_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
            self.bind_group = None;
            log::debug!("sprite texture uploaded ({}x{})", self.image.width, self.image.height);
        }

        if self.viewport_ubo.is_none() {
            self.viewport_ubo = Some(create_viewport_ubo(ctx, "turtle sprite viewport ubo"));
            self.bind_group = None;
        }

        if self.bind_group.is_some() {
            return;
        }

        let (Some(pipeline), Some(view), Some(ubo)) = (
            self.pipeline.as_ref(),
            self.texture_view.as_ref(),
            self.viewport_ubo.as_ref(),
        ) else {
            return;
        };

        self.bind_group = Some(pipeline.bind_group(ctx, "turtle sprite bind group", ubo, view));
    }
}
