#![allow(dead_code)]
//! Canvas bounds: the coordinate frame shared by all consumers.

use serde::{Deserialize, Serialize};

use crate::state::Vec2;

/// Width, height, and origin (top-left) of the drawing area. Set once
/// per scene, read by any collaborator needing the coordinate frame.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub origin: Vec2,
}

impl Canvas {
    pub fn new(width: u32, height: u32, origin: Vec2) -> Self {
        Self {
            width,
            height,
            origin,
        }
    }
}
