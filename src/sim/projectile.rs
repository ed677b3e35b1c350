//! Projectile integration
//!
//! Range is consumed by distance actually travelled, so a fast bullet burns
//! through its range in fewer ticks than a slow one.

use super::bounds::Bounds;
use super::state::Bullet;

/// Move a bullet forward by `dt_ms`. Returns false once it should expire.
pub fn advance(bullet: &mut Bullet, dt_ms: f32, field: &Bounds) -> bool {
    let step = bullet.vel * (dt_ms / 1000.0);
    bullet.pos += step;
    bullet.range -= step.length();
    bullet.range > 0.0 && field.contains(bullet.pos)
}

/// Projectile step of a tick
pub fn update_bullets(bullets: &mut Vec<Bullet>, dt_ms: f32) {
    let field = Bounds::playfield();
    bullets.retain_mut(|b| advance(b, dt_ms, &field));
}
