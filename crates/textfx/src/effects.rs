//! Built-in effects.
//!
//! All built-ins are pure functions of the tag arguments and the character
//! position, so the same markup always renders the same glyphs.
//!
//! | Tag | Arguments | Result |
//! |---|---|---|
//! | `{color,r=1,g=0,b=0}` | `r g b a` (default 1) | sets the color |
//! | `{alpha=0.5}` | name slot (default 1) | multiplies alpha |
//! | `{offset,x=2,y=-1}` | `x y` (default 0) | shifts the glyph |
//! | `{scale=2}` / `{scale,x=2,y=1}` | name slot (default 1), `x y` | multiplies scale |
//! | `{rotate=0.3}` | name slot, radians (default 0) | adds rotation |
//! | `{skew,x=0.2}` | `x y` (default 0) | adds shear |
//! | `{wave=2,frequency=0.5}` | amplitude (default 2), `frequency` | vertical sine by index |
//! | `{shake=1,seed=0}` | amplitude (default 1), `seed` | fixed per-index jitter |
//! | `{rainbow=8}` | period in characters, sign ignored (default run length) | hue cycle |

use fxmarkup::EffectArgs;

use crate::glyph::{CharInfo, GlyphState, Rgba};
use crate::registry::{EffectDefinition, EffectRegistry};

/// Register every built-in effect missing from `registry`.
///
/// Names already taken are left alone, so user definitions win.
pub fn install(registry: &mut EffectRegistry) {
    for definition in builtins() {
        if let Err(err) = registry.insert(definition) {
            log::debug!("effects: keeping existing definition: {}", err);
        }
    }
}

/// Definitions for every built-in effect.
pub fn builtins() -> Vec<EffectDefinition> {
    vec![
        EffectDefinition::new("color", color),
        EffectDefinition::new("alpha", alpha),
        EffectDefinition::new("offset", offset),
        EffectDefinition::new("scale", scale),
        EffectDefinition::new("rotate", rotate),
        EffectDefinition::new("skew", skew),
        EffectDefinition::new("wave", wave),
        EffectDefinition::new("shake", shake),
        EffectDefinition::new("rainbow", rainbow),
    ]
}

fn arg(args: &EffectArgs, key: &str, default: f64) -> f32 {
    args.get_or(key, default) as f32
}

fn slot(args: &EffectArgs, default: f64) -> f32 {
    args.value().unwrap_or(default) as f32
}

fn color(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    state.color = Rgba::new(
        arg(args, "r", 1.0),
        arg(args, "g", 1.0),
        arg(args, "b", 1.0),
        arg(args, "a", 1.0),
    );
}

fn alpha(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    state.color.a *= slot(args, 1.0);
}

fn offset(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    state.offset.x += arg(args, "x", 0.0);
    state.offset.y += arg(args, "y", 0.0);
}

fn scale(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    let uniform = args.value().unwrap_or(1.0);
    state.scale.x *= arg(args, "x", uniform);
    state.scale.y *= arg(args, "y", uniform);
}

fn rotate(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    state.rotation += slot(args, 0.0);
}

fn skew(state: &mut GlyphState, args: &EffectArgs, _: &CharInfo<'_>) {
    state.skew.x += arg(args, "x", 0.0);
    state.skew.y += arg(args, "y", 0.0);
}

fn wave(state: &mut GlyphState, args: &EffectArgs, info: &CharInfo<'_>) {
    let amplitude = slot(args, 2.0);
    let frequency = arg(args, "frequency", 0.5);
    state.offset.y += amplitude * (info.index as f32 * frequency).sin();
}

fn shake(state: &mut GlyphState, args: &EffectArgs, info: &CharInfo<'_>) {
    let amplitude = slot(args, 1.0);
    let seed = args.get_or("seed", 0.0) as u64;
    let bits = mix(seed ^ info.index as u64);
    state.offset.x += amplitude * unit(bits as u32);
    state.offset.y += amplitude * unit((bits >> 32) as u32);
}

fn rainbow(state: &mut GlyphState, args: &EffectArgs, info: &CharInfo<'_>) {
    let period = args.value().map_or(info.length as f64, f64::abs).max(1.0) as f32;
    let hue = info.index.saturating_sub(1) as f32 / period;
    let alpha = state.color.a;
    state.color = Rgba::from_hsv(hue, 1.0, 1.0);
    state.color.a = alpha;
}

/// splitmix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Map 32 random bits to `-1.0..=1.0`.
fn unit(bits: u32) -> f32 {
    (bits as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
}
