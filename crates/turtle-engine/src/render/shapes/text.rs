use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{
    create_viewport_ubo, quad_vertices, upload_image, warn_missing_once,
    write_viewport_ubo, TexturedPipeline, TexturedVertex, VertexBuffer,
};

/// Renderer for `DrawCmd::Text`.
///
/// Text arrives already rasterized. Each line gets a short-lived texture and
/// bind group for the frame it is drawn in; the status overlay is a handful
/// of short lines, so there is no atlas.
pub struct TextRenderer {
    pipeline: Option<TexturedPipeline>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertices: Vec<TexturedVertex>,
    vbo: VertexBuffer<TexturedVertex>,

    warned_missing: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline: None,
            viewport_ubo: None,
            vertices: Vec::new(),
            vbo: VertexBuffer::new("turtle text vbo"),
            warned_missing: false,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        if self.pipeline.as_ref().map(|p| p.format) != Some(ctx.surface_format) {
            self.pipeline = Some(TexturedPipeline::new(
                ctx,
                "turtle text pipeline",
                wgpu::FilterMode::Nearest,
            ));
        }
        if self.viewport_ubo.is_none() {
            self.viewport_ubo = Some(create_viewport_ubo(ctx, "turtle text viewport ubo"));
        }

        let (Some(pipeline), Some(ubo)) = (self.pipeline.as_ref(), self.viewport_ubo.as_ref())
        else {
            warn_missing_once(&mut self.warned_missing, "TextRenderer", "pipeline or viewport uniform");
            return;
        };

        self.vertices.clear();
        let mut bind_groups = Vec::new();

        for item in draw_list.iter_in_paint_order() {
            let DrawCmd::Text(cmd) = &item.cmd else { continue };
            if cmd.image.is_empty() {
                continue;
            }

            // Coverage is linear; keep the texture format linear too.
            let texture = upload_image(
                ctx,
                "turtle text line",
                &cmd.image,
                wgpu::TextureFormat::Rgba8Unorm,
            );
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            bind_groups.push(pipeline.bind_group(ctx, "turtle text bind group", ubo, &view));

            self.vertices
                .extend_from_slice(&quad_vertices(cmd.bounds().corners()));
        }

        if bind_groups.is_empty() {
            return;
        }

        write_viewport_ubo(ctx, ubo);

        let Some(vbo) = self.vbo.upload(ctx, &self.vertices) else {
            warn_missing_once(&mut self.warned_missing, "TextRenderer", "vertex buffer");
            return;
        };

        let mut rpass = target.load_pass("turtle text pass");
        rpass.set_pipeline(&pipeline.pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        for (i, bind_group) in bind_groups.iter().enumerate() {
            let first = i as u32 * 6;
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.draw(first..first + 6, 0..1);
        }
    }
}
