use crate::particles::constants::{
    WATERMARK_BASELINE_Y, WATERMARK_FONT, WATERMARK_RASTER_H, WATERMARK_RASTER_W,
};
use crate::particles::{Raster, TextRaster};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Draws labels onto a detached 2D canvas.
pub struct CanvasTextRaster {
    document: web::Document,
}

impl CanvasTextRaster {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    /// Wait for the label face to finish loading. Web fonts arrive
    /// asynchronously, so a first visit would otherwise sample a blank canvas.
    pub async fn load_font(&self) -> anyhow::Result<()> {
        let promise = self
            .document
            .fonts()
            .load(WATERMARK_FONT)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }

    fn draw(&self, label: &str) -> anyhow::Result<Raster> {
        let canvas: web::HtmlCanvasElement = self
            .document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(WATERMARK_RASTER_W);
        canvas.set_height(WATERMARK_RASTER_H);
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_font(WATERMARK_FONT);
        ctx.set_fill_style_str("white");
        ctx.set_text_align("center");
        ctx.fill_text(label, WATERMARK_RASTER_W as f64 * 0.5, WATERMARK_BASELINE_Y)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let image = ctx
            .get_image_data(0.0, 0.0, WATERMARK_RASTER_W as f64, WATERMARK_RASTER_H as f64)
            .map_err(|e: JsValue| anyhow::anyhow!("{:?}", e))?;
        Raster::new(image.width(), image.height(), image.data().0)
            .ok_or_else(|| anyhow::anyhow!("short image data"))
    }
}

impl TextRaster for CanvasTextRaster {
    fn font_available(&self) -> bool {
        match self.document.fonts().check(WATERMARK_FONT) {
            Ok(ready) => ready,
            Err(e) => {
                log::warn!("font check failed: {:?}", e);
                false
            }
        }
    }

    fn rasterize(&self, label: &str) -> Option<Raster> {
        match self.draw(label) {
            Ok(raster) => Some(raster),
            Err(e) => {
                log::warn!("watermark raster error: {:?}", e);
                None
            }
        }
    }
}
