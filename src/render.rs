use crate::constants::{LINK_RGB, LINK_WIDTH, PARTICLE_FILL, PARTICLE_GLOW, PARTICLE_GLOW_BLUR};
use crate::core::ParticleField;
use std::f64::consts::TAU;
use web_sys as web;

/// Redraw the whole field: clear, glowing dots, then the proximity lines.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

    ctx.set_fill_style_str(PARTICLE_FILL);
    ctx.set_shadow_color(PARTICLE_GLOW);
    ctx.set_shadow_blur(PARTICLE_GLOW_BLUR);
    for p in field.particles() {
        ctx.begin_path();
        if ctx
            .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU)
            .is_ok()
        {
            ctx.fill();
        }
    }

    let ps = field.particles();
    ctx.set_line_width(LINK_WIDTH);
    for link in field.links() {
        let (a, b) = (ps[link.a].pos, ps[link.b].pos);
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.set_stroke_style_str(&format!("rgba({}, {})", LINK_RGB, link.alpha));
        ctx.stroke();
    }
}
