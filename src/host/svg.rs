use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{WavifyError, WavifyResult};
use crate::host::headless::HeadlessHost;

/// Straight-alpha RGBA8 pixels of a rasterized snapshot.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes `container` and its targets, bottom first, as a standalone SVG document.
pub fn snapshot_svg(host: &HeadlessHost, container: &str) -> WavifyResult<String> {
    let bounds = host.container_bounds(container).ok_or_else(|| {
        WavifyError::integration(format!("container \"{container}\" not found on host surface"))
    })?;

    let mut svg = String::new();
    let (w, h) = (bounds.width, bounds.height);
    // `write!` into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    for (_, target) in host.targets_in(container) {
        let Some(path) = &target.path else {
            continue;
        };
        let [a, b, c, d, e, f] = target.transform.as_coeffs();
        let _ = write!(
            svg,
            r#"  <path id="{}" d="{}" opacity="{}" transform="matrix({a} {b} {c} {d} {e} {f})""#,
            escape_attr(&target.key),
            path.to_svg(),
            target.opacity,
        );
        if let Some(fill) = &target.fill {
            let _ = write!(svg, r#" fill="{}""#, escape_attr(fill));
        }
        svg.push_str("/>\n");
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Rasterizes an SVG document with resvg.
pub fn rasterize(svg: &str) -> WavifyResult<FrameRgba> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).context("parse svg snapshot")?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(
        || {
            WavifyError::integration(format!(
                "cannot rasterize a {}x{} snapshot",
                size.width(),
                size.height()
            ))
        },
    )?;
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut data = pixmap.take();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(FrameRgba {
        width: size.width(),
        height: size.height(),
        data,
    })
}

pub fn write_png(frame: &FrameRgba, out: &Path) -> WavifyResult<()> {
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/svg.rs"]
mod tests;
