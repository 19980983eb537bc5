use std::borrow::Cow;

use futures::StreamExt as _;

use crate::{
    assets::decode::PreparedImage,
    assets::loader::ImageLoader,
    composition::model::Character,
    foundation::error::{SpriteError, SpriteResult},
    render::geometry::{CanvasGeometry, canvas_geometry, draw_origin},
    render::raster::{MAX_RASTER_PIXELS, Raster},
};

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(src[i], dc);
    }
    out
}

/// Draw `image` with its top-left corner at `(x, y)`, scaled to `width` x `height` and clipped
/// to the canvas.
///
/// The footprint always follows the declared size, not the image's intrinsic one.
pub fn draw_image(
    canvas: &mut Raster,
    image: &PreparedImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
) -> SpriteResult<()> {
    if width == 0 || height == 0 || image.width == 0 || image.height == 0 {
        return Ok(());
    }
    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        return Err(SpriteError::geometry(format!(
            "layer footprint {width}x{height} is too large"
        )));
    }

    let pixels: Cow<'_, [u8]> = if (image.width, image.height) == (width, height) {
        Cow::Borrowed(image.rgba8_premul.as_slice())
    } else {
        let src = image::RgbaImage::from_raw(
            image.width,
            image.height,
            image.rgba8_premul.as_ref().clone(),
        )
        .ok_or_else(|| SpriteError::decode("image buffer does not match its dimensions"))?;
        // Premultiplied data filters without dark fringes.
        Cow::Owned(
            image::imageops::resize(&src, width, height, image::imageops::FilterType::Triangle)
                .into_raw(),
        )
    };

    let cw = i64::from(canvas.width);
    let ch = i64::from(canvas.height);
    let x0 = x.max(0);
    let x1 = x.saturating_add(i64::from(width)).min(cw);
    if x0 >= x1 {
        return Ok(());
    }

    for row in 0..i64::from(height) {
        let cy = y.saturating_add(row);
        if cy < 0 || cy >= ch {
            continue;
        }
        for cx in x0..x1 {
            let si = ((row * i64::from(width) + (cx - x)) * 4) as usize;
            let di = ((cy * cw + cx) * 4) as usize;
            let src = [
                pixels[si],
                pixels[si + 1],
                pixels[si + 2],
                pixels[si + 3],
            ];
            let dst = [
                canvas.data[di],
                canvas.data[di + 1],
                canvas.data[di + 2],
                canvas.data[di + 3],
            ];
            canvas.data[di..di + 4].copy_from_slice(&over(dst, src));
        }
    }
    Ok(())
}

/// A character's layers flattened onto one raster.
#[derive(Clone, Debug)]
pub struct ComposedSprite {
    pub name: String,
    pub geometry: CanvasGeometry,
    pub raster: Raster,
    pub layers_drawn: usize,
    pub layers_skipped: usize,
}

/// Composite every layer of `character` in paint order.
///
/// Up to `layer_jobs` images are fetched ahead of the draw cursor; draws still happen strictly
/// in source order. A layer whose image fails to load or decode is logged and skipped.
#[tracing::instrument(skip(character, loader), fields(character = %character.name, layers = character.layers.len()))]
pub async fn compose(
    character: &Character,
    loader: &dyn ImageLoader,
    layer_jobs: usize,
) -> SpriteResult<ComposedSprite> {
    let geometry = canvas_geometry(&character.layers)?;
    if geometry.is_empty() {
        return Err(SpriteError::geometry(format!(
            "canvas {}x{} has no area",
            geometry.width, geometry.height
        )));
    }

    let mut raster = Raster::transparent(geometry.width, geometry.height)?;
    let mut loads = futures::stream::iter(character.layers.iter().map(|layer| async move {
        (layer, loader.load(&layer.image_ref).await)
    }))
    .buffered(layer_jobs.max(1));

    let mut layers_drawn = 0;
    let mut layers_skipped = 0;
    while let Some((layer, loaded)) = loads.next().await {
        let (x, y) = draw_origin(layer, &geometry);
        let drawn = loaded
            .and_then(|img| draw_image(&mut raster, &img, x, y, layer.width, layer.height));
        match drawn {
            Ok(()) => layers_drawn += 1,
            Err(err) => {
                layers_skipped += 1;
                tracing::warn!(layer = %layer.image_ref, error = %err, "skipping layer");
            }
        }
    }

    Ok(ComposedSprite {
        name: character.name.clone(),
        geometry,
        raster,
        layers_drawn,
        layers_skipped,
    })
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
