#![allow(dead_code)]
//! Per-channel linear interpolation over one covering interval.
//!
//! `sample` is pure: given an interval and an in-range tick it always
//! produces a valid `State`. Callers locate the covering interval first
//! (see `Timeline::interval_at` and `Scene::objects_at`).

use crate::interval::{Interval, Tick};
use crate::state::{Rgb, State, Vec2};

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Integer channels interpolate in f32 and round to nearest, so the
/// endpoints reproduce exactly at t = 0 and t = 1.
#[inline]
fn lerp_u32(a: u32, b: u32, t: f32) -> u32 {
    lerp_f32(a as f32, b as f32, t).round() as u32
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    lerp_f32(a as f32, b as f32, t).round() as u8
}

/// Interpolate every channel of `interval` at `tick`.
///
/// Requires `interval.start_tick <= tick <= interval.end_tick`. A
/// zero-length interval yields its start state directly.
pub fn sample(interval: &Interval, tick: Tick) -> State {
    debug_assert!(
        interval.covers(tick),
        "tick {tick} outside interval [{}, {}]",
        interval.start_tick,
        interval.end_tick
    );
    if interval.start_tick == interval.end_tick {
        return interval.start_state;
    }
    let t = (tick - interval.start_tick) as f32 / (interval.end_tick - interval.start_tick) as f32;
    let a = &interval.start_state;
    let b = &interval.end_state;
    State {
        position: Vec2 {
            x: lerp_f32(a.position.x, b.position.x, t),
            y: lerp_f32(a.position.y, b.position.y, t),
        },
        color: Rgb {
            r: lerp_u8(a.color.r, b.color.r, t),
            g: lerp_u8(a.color.g, b.color.g, t),
            b: lerp_u8(a.color.b, b.color.b, t),
        },
        width: lerp_u32(a.width, b.width, t),
        height: lerp_u32(a.height, b.height, t),
    }
}
