#![allow(dead_code)]
//! Visual state values: position, color, and size snapshots.

use serde::{Deserialize, Serialize};

/// 2D position in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGB color. The gamut is carried by the type; raw integer
/// surfaces validate before constructing one.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A full visual snapshot of one object at one tick. Pure value,
/// compared structurally. The default is a zero-sized black pose at the
/// origin.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct State {
    pub position: Vec2,
    pub color: Rgb,
    pub width: u32,
    pub height: u32,
}

impl State {
    pub fn new(position: Vec2, color: Rgb, width: u32, height: u32) -> Self {
        Self {
            position,
            color,
            width,
            height,
        }
    }
}
