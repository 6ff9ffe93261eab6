use crate::constants::*;
use crate::dom::{self, set_style};
use crate::{fallback, style};
use daysky_core::{
    CloudPose, CycleState, ParticlePose, ProceduralField, Surface, SurfaceError, TierProfile,
    TrailPose,
};
use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// DOM implementation of the engine surface.
///
/// All nodes are created in `build` and kept for the life of the mount, so a
/// frame only rewrites `transform`, `opacity` and colours.
pub struct DomSurface {
    root: web::HtmlElement,
    window: web::Window,
    document: web::Document,
    layer: Option<web::HtmlElement>,
    trail_layer: Option<web::HtmlElement>,
    backdrop: Option<web::HtmlElement>,
    marker: Option<web::HtmlElement>,
    clouds: Vec<web::HtmlElement>,
    stars: Vec<web::HtmlElement>,
    particles: Vec<(web::HtmlElement, f32)>,
    trail: Vec<web::HtmlElement>,
    claimed: bool,
}

fn dom_err(e: JsValue) -> SurfaceError {
    SurfaceError::Dom(format!("{:?}", e))
}

impl DomSurface {
    pub fn new(root: web::HtmlElement) -> Result<Self, SurfaceError> {
        let window = web::window().ok_or(SurfaceError::Unavailable)?;
        let document = root.owner_document().ok_or(SurfaceError::Unavailable)?;
        Ok(Self {
            root,
            window,
            document,
            layer: None,
            trail_layer: None,
            backdrop: None,
            marker: None,
            clouds: Vec::new(),
            stars: Vec::new(),
            particles: Vec::new(),
            trail: Vec::new(),
            claimed: false,
        })
    }

    fn build_nodes(
        &mut self,
        field: &ProceduralField,
        trail_len: usize,
        profile: &TierProfile,
    ) -> Result<(), JsValue> {
        let doc = &self.document;
        let layer = dom::create_div(doc, LAYER_CLASS, LAYER_STYLE)?;

        // back to front: backdrop, clouds, sun/moon, stars, particles
        let backdrop = dom::create_div(doc, BACKDROP_CLASS, BACKDROP_STYLE)?;
        layer.append_child(&backdrop)?;

        for c in &field.clouds {
            let cluster = dom::create_div(doc, CLOUD_CLASS, CLOUD_STYLE)?;
            set_style(&cluster, "top", &style::percent(c.top_pct));
            set_style(&cluster, "z-index", &c.tier.to_string());
            for b in &c.blobs {
                let blob = dom::create_div(doc, BLOB_CLASS, BLOB_STYLE)?;
                set_style(&blob, "left", &style::px(b.x));
                set_style(&blob, "top", &style::px(b.y));
                set_style(&blob, "width", &style::px(b.w));
                set_style(&blob, "height", &style::px(b.h));
                set_style(&blob, "opacity", &style::opacity(b.alpha));
                set_style(&blob, "filter", &style::blur(b.blur_px * profile.blur_scale));
                cluster.append_child(&blob)?;
            }
            layer.append_child(&cluster)?;
            self.clouds.push(cluster);
        }

        let marker = dom::create_div(doc, MARKER_CLASS, MARKER_STYLE)?;
        layer.append_child(&marker)?;

        for s in &field.stars {
            let star = dom::create_div(doc, STAR_CLASS, STAR_STYLE)?;
            set_style(&star, "left", &style::percent(s.left_pct));
            set_style(&star, "top", &style::percent(s.top_pct));
            set_style(&star, "width", &style::px(s.size_px));
            set_style(&star, "height", &style::px(s.size_px));
            layer.append_child(&star)?;
            self.stars.push(star);
        }

        for p in &field.particles {
            let dot = dom::create_div(doc, PARTICLE_CLASS, PARTICLE_STYLE)?;
            set_style(&dot, "left", &style::percent(p.left_pct));
            set_style(&dot, "top", &style::percent(p.top_pct));
            set_style(&dot, "width", &style::px(p.size_px));
            set_style(&dot, "height", &style::px(p.size_px));
            layer.append_child(&dot)?;
            self.particles.push((dot, p.size_px));
        }

        if trail_len > 0 {
            let trail_layer = dom::create_div(doc, LAYER_CLASS, TRAIL_LAYER_STYLE)?;
            let dot_style = trail_dot_style();
            for _ in 0..trail_len {
                let dot = dom::create_div(doc, TRAIL_CLASS, &dot_style)?;
                trail_layer.append_child(&dot)?;
                self.trail.push(dot);
            }
            // above page content, unlike the rest of the sky
            match self.document.body() {
                Some(body) => body.append_child(&trail_layer)?,
                None => layer.append_child(&trail_layer)?,
            };
            self.trail_layer = Some(trail_layer);
        }

        self.root.append_child(&layer)?;
        self.layer = Some(layer);
        self.backdrop = Some(backdrop);
        self.marker = Some(marker);
        Ok(())
    }
}

fn trail_dot_style() -> String {
    let half = TRAIL_DOT_PX * 0.5;
    format!(
        "position:absolute;left:{l};top:{l};width:{s};height:{s};border-radius:9999px;\
         background:{c};box-shadow:0 0 {g} {glow};filter:blur(0.5px);mix-blend-mode:screen;\
         will-change:transform,opacity;pointer-events:none;",
        l = style::px(-half),
        s = style::px(TRAIL_DOT_PX),
        c = TRAIL_COLOR,
        g = style::px(TRAIL_DOT_PX.max(10.0)),
        glow = TRAIL_GLOW,
    )
}

impl Surface for DomSurface {
    fn viewport(&self) -> Vec2 {
        dom::viewport_size(&self.window)
    }

    fn build(
        &mut self,
        field: &ProceduralField,
        trail_len: usize,
        profile: &TierProfile,
    ) -> Result<(), SurfaceError> {
        if self.layer.is_some() {
            return Ok(());
        }
        if self.root.has_attribute(MOUNTED_ATTR) {
            return Err(SurfaceError::Occupied);
        }
        self.root
            .set_attribute(MOUNTED_ATTR, "")
            .map_err(dom_err)?;
        self.claimed = true;
        if let Err(e) = self.build_nodes(field, trail_len, profile) {
            self.clear();
            return Err(dom_err(e));
        }
        fallback::hide(&self.root);
        Ok(())
    }

    fn paint_sky(&mut self, sky: &CycleState) {
        if let Some(backdrop) = &self.backdrop {
            set_style(
                backdrop,
                "background",
                &style::radial_gradient(sky.inner, sky.outer),
            );
        }
        if let Some(marker) = &self.marker {
            let (left, top) = style::marker_position(sky.orbit);
            set_style(marker, "left", &left);
            set_style(marker, "top", &top);
            set_style(marker, "background", &style::rgb(sky.orbit_color));
        }
    }

    fn paint_particle(&mut self, index: usize, pose: &ParticlePose) {
        if let Some((dot, size)) = self.particles.get(index) {
            set_style(dot, "transform", &style::translate_viewport(pose.dx_vw, pose.dy_vh));
            set_style(dot, "opacity", &style::opacity(pose.opacity));
            set_style(dot, "box-shadow", &style::glow_shadow(pose.glow, *size));
        }
    }

    fn paint_cloud(&mut self, index: usize, pose: &CloudPose) {
        if let Some(cluster) = self.clouds.get(index) {
            set_style(cluster, "transform", &style::translate_vw_scale(pose.x_vw, pose.scale));
            set_style(cluster, "opacity", &style::opacity(pose.opacity));
            set_style(cluster, "color", &style::rgba(pose.tint));
        }
    }

    fn paint_star(&mut self, index: usize, opacity: f32) {
        if let Some(star) = self.stars.get(index) {
            set_style(star, "opacity", &style::opacity(opacity));
        }
    }

    fn paint_trail(&mut self, index: usize, pose: &TrailPose) {
        if let Some(dot) = self.trail.get(index) {
            set_style(dot, "transform", &style::translate_px_scale(pose.pos, pose.scale));
            set_style(dot, "opacity", &style::opacity(pose.opacity));
        }
    }

    fn clear(&mut self) {
        if !self.claimed {
            return;
        }
        if let Some(layer) = self.layer.take() {
            layer.remove();
        }
        if let Some(trail_layer) = self.trail_layer.take() {
            trail_layer.remove();
        }
        self.backdrop = None;
        self.marker = None;
        self.clouds.clear();
        self.stars.clear();
        self.particles.clear();
        self.trail.clear();
        if fallback::is_hidden(&self.root) {
            fallback::show(&self.root);
        }
        _ = self.root.remove_attribute(MOUNTED_ATTR);
        self.claimed = false;
    }
}
